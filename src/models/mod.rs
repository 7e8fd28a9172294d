//! Domain models for subnet planning.
//!
//! This module contains the core data structures and leaf arithmetic:
//! - [`ipv4`] - address codec, masks and alignment helpers
//! - [`Block`] - a declared subnet with its computed range
//! - [`CidrError`] - validation and calculation errors

mod block;
mod error;
mod ipv4;
mod palette;
mod validate;

// Re-export public types
pub use block::{compute_block, Block, BlockId};
pub use error::CidrError;
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, format_address, get_cidr_mask, lo_mask,
    parse_address, prefix_for_size, to_binary, Cidr, MAX_LENGTH,
};
pub use palette::{color_for, generate_colors, PALETTE};
pub use validate::{validate, validate_cidr, ValidationResult};
