pub mod sample_range;
