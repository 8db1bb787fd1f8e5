use super::Shower;
use crate::consts::NIL_TEXT;

/// The empty marker. Always shows as [`NIL_TEXT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

impl Shower for Nil {
    fn show(&self) -> String {
        NIL_TEXT.to_string()
    }
}
