pub mod use_next_tick;
pub mod use_random;
