pub mod dto;
pub mod filter;
