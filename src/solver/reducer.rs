use crate::expression::{OperatorSet, Solution, Step};
use crate::solver::closest::Closest;

/// Every legal first reduction of `cards`, paired with the hand it leaves.
///
/// Pairs are visited with `i` ascending then `j > i` ascending, and
/// operators in declared order. The larger value is always the left
/// operand, so each subtraction and division is tried in one orientation
/// only. The remaining hand keeps the untouched cards in order and appends
/// the result.
pub(crate) fn branches(
    cards: &[u64],
    operators: OperatorSet,
) -> impl Iterator<Item = (Step, Vec<u64>)> + '_ {
    let n = cards.len();
    (0..n)
        .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
        .flat_map(move |(i, j)| {
            operators.iter().filter_map(move |op| {
                let step = Step::combine(cards[i], op, cards[j]).ok()?;
                Some((step, remaining(cards, i, j, step.result)))
            })
        })
}

fn remaining(cards: &[u64], i: usize, j: usize, result: u64) -> Vec<u64> {
    let mut rest = Vec::with_capacity(cards.len() - 1);
    rest.extend(
        cards
            .iter()
            .enumerate()
            .filter(|&(pos, _)| pos != i && pos != j)
            .map(|(_, &card)| card),
    );
    rest.push(result);
    rest
}

/// Reduce every card in `cards` to a single value as close to `target` as
/// possible.
///
/// Returns the first closest solution in branch order, stopping at the
/// first exact one. `None` means no legal reduction exists (only possible
/// with a restricted operator set); a single card is always a
/// [`Solution::Leaf`].
pub fn reduce(target: u64, cards: &[u64], operators: OperatorSet) -> Option<Solution> {
    if let [card] = cards {
        return Some(Solution::Leaf(*card));
    }

    let mut best = Closest::new(target);
    for (step, rest) in branches(cards, operators) {
        if let Some(sub) = reduce(target, &rest, operators)
            && best.offer_after(step, sub)
        {
            break;
        }
    }
    best.into_solution()
}
