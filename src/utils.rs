mod sequence_counter;

pub use sequence_counter::SequenceCounter;
