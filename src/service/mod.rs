pub mod league;
pub mod search;
pub mod webapi;
