use crate::{error::ValidationError, gateway::Operations};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use time::Date;

mod header;
pub use header::*;
mod work_experience;
pub use work_experience::*;
mod education;
pub use education::*;
mod skill;
pub use skill::*;
mod language;
pub use language::*;
mod interest;
pub use interest::*;
mod collection;
pub use collection::*;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

static DATE_FORMAT: &[time::format_description::FormatItem<'static>] =
	time::macros::format_description!("[year]-[month]-[day]");

/// Server-assigned identity of a record. Absent until the record has been created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl std::fmt::Display for RecordId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl std::str::FromStr for RecordId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(s.trim().parse()?))
	}
}

impl From<RecordId> for Value {
	fn from(id: RecordId) -> Self {
		Value::from(id.0)
	}
}

// Graphene hands out ids as numbers for `Int` fields and as strings for `ID` fields.
impl<'de> Deserialize<'de> for RecordId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Int(i64),
			Text(String),
		}
		match Raw::deserialize(deserializer)? {
			Raw::Int(id) => Ok(Self(id)),
			Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
	Header,
	WorkExperience,
	Education,
	Skill,
	Language,
	Interest,
}

impl ResourceKind {
	pub const ALL: [Self; 6] = [
		Self::Header,
		Self::WorkExperience,
		Self::Education,
		Self::Skill,
		Self::Language,
		Self::Interest,
	];

	pub fn name(&self) -> &'static str {
		match self {
			Self::Header => "header",
			Self::WorkExperience => "work experience",
			Self::Education => "education",
			Self::Skill => "skill",
			Self::Language => "language",
			Self::Interest => "interest",
		}
	}
}

impl std::fmt::Display for ResourceKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// One kind of profile record, and everything the generic gateway needs to move it over the wire.
pub trait Resource: Clone + Default + PartialEq + std::fmt::Debug + DeserializeOwned + 'static {
	const KIND: ResourceKind;

	fn operations() -> &'static Operations;

	fn id(&self) -> Option<RecordId>;
	fn set_id(&mut self, id: Option<RecordId>);

	/// Wire variables for create/update, without the identity field.
	/// Optional attributes must already be normalized (see [`optional`]).
	fn fields(&self) -> Map<String, Value>;

	fn validate(&self) -> Result<(), ValidationError>;

	fn collection(profile: &Profile) -> &ResourceCollection<Self>;
	fn collection_mut(profile: &mut Profile) -> &mut ResourceCollection<Self>;
}

/// Nullable string attribute as the remote schema wants it: `null` for "not provided", never `""`.
pub fn optional(value: &Option<String>) -> Value {
	match value {
		Some(text) if !blank(text) => Value::String(text.clone()),
		_ => Value::Null,
	}
}

pub fn date(value: &Option<Date>) -> Value {
	value
		.and_then(|date| date.format(DATE_FORMAT).ok())
		.map(Value::String)
		.unwrap_or(Value::Null)
}

pub fn parse_date(text: &str) -> Option<Date> {
	Date::parse(text.trim(), DATE_FORMAT).ok()
}

pub fn blank(text: &str) -> bool {
	text.trim().is_empty()
}
