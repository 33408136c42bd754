use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns one escape value into a colour.
pub trait ColourMap {
    type Failure: Error;

    fn map(&self, escape_time: u32) -> Result<Colour, Self::Failure>;

    fn display_name(&self) -> &str;
}
