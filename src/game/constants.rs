// Card pools and target range of the standard numbers round

pub const LARGE_CARDS: [u64; 4] = [25, 50, 75, 100];
/// Two of each value from 1 to 10
pub const SMALL_CARDS: [u64; 20] = [
    1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10,
];
pub const HAND_SIZE: usize = 6;
pub const MIN_TARGET: u64 = 100;
pub const MAX_TARGET: u64 = 999;
