#[macro_use]
extern crate lazy_static;

pub mod aliases;
pub mod identifier;
pub mod interval;
pub mod normalize;
pub mod parser;
pub mod timezone;

mod compile;
mod property;

pub use compile::compile;
pub use compile::CompiledTable;

pub use property::PropertyKind;

pub use interval::to_hex_string;
pub use interval::Interval;
pub use interval::MAX_CODE_POINT;

pub use parser::ParseError;
pub use parser::ParseErrorKind;

pub use normalize::normalize;
pub use normalize::NormalizedTable;

pub use identifier::map_identifiers;
pub use identifier::Identifier;
pub use identifier::KnownIdentifiers;
pub use identifier::NewIdentifier;
pub use identifier::NoKnownIdentifiers;

pub use aliases::parse_property_value_aliases;
pub use aliases::script_aliases;
pub use aliases::PropertyValueAlias;

pub use timezone::short_time_zone_ids;
pub use timezone::ShortTimeZoneId;
