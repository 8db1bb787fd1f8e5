pub mod combinators;
pub mod consts;
pub mod logging;
pub mod show;
pub mod tagged;
