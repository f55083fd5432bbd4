pub mod head_to_head;
pub mod ids;
pub mod player;
pub mod ranking;
pub mod stats;
