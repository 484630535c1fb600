use super::{blank, date, iso_date, Profile, RecordId, Resource, ResourceCollection, ResourceKind};
use crate::{
	error::ValidationError,
	gateway::{Document, Operations, Search},
};
use serde::Deserialize;
use serde_json::{Map, Value};
use time::Date;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
	pub id: Option<RecordId>,
	pub name: String,
	pub proficiency: String,
	#[serde(with = "iso_date::option")]
	pub start_date: Option<Date>,
	#[serde(with = "iso_date::option")]
	pub end_date: Option<Date>,
}

const CREATE_OR_UPDATE: Document = Document {
	name: "CreateOrUpdateLanguage",
	field: "createOrUpdateLanguage",
	query: "mutation CreateOrUpdateLanguage(
		$id: Int, $name: String!, $proficiency: String!, $startDate: Date!, $endDate: Date!
	) {
		createOrUpdateLanguage(
			idLanguage: $id, name: $name, proficiency: $proficiency, startDate: $startDate, endDate: $endDate
		) { id: idLanguage name proficiency startDate endDate }
	}",
};

static OPERATIONS: Operations = Operations {
	list: Document {
		name: "GetLanguages",
		field: "languages",
		query: "query GetLanguages($search: String) {
			languages(search: $search) { id name proficiency startDate endDate }
		}",
	},
	by_id: Document {
		name: "GetLanguageById",
		field: "languageById",
		query: "query GetLanguageById($id: Int!) {
			languageById(idLanguage: $id) { id name proficiency startDate endDate }
		}",
	},
	create: CREATE_OR_UPDATE,
	update: CREATE_OR_UPDATE,
	delete: Document {
		name: "DeleteLanguage",
		field: "deleteLanguage",
		query: "mutation DeleteLanguage($id: Int!) { deleteLanguage(idLanguage: $id) { id: idLanguage } }",
	},
	search: Search::Optional,
};

impl Resource for Language {
	const KIND: ResourceKind = ResourceKind::Language;

	fn operations() -> &'static Operations {
		&OPERATIONS
	}

	fn id(&self) -> Option<RecordId> {
		self.id
	}

	fn set_id(&mut self, id: Option<RecordId>) {
		self.id = id;
	}

	fn fields(&self) -> Map<String, Value> {
		let mut fields = Map::new();
		fields.insert("name".into(), self.name.clone().into());
		fields.insert("proficiency".into(), self.proficiency.clone().into());
		fields.insert("startDate".into(), date(&self.start_date));
		fields.insert("endDate".into(), date(&self.end_date));
		fields
	}

	fn validate(&self) -> Result<(), ValidationError> {
		ValidationError::check([
			("name", blank(&self.name)),
			("proficiency", blank(&self.proficiency)),
			("startDate", self.start_date.is_none()),
			("endDate", self.end_date.is_none()),
		])
	}

	fn collection(profile: &Profile) -> &ResourceCollection<Self> {
		&profile.languages
	}

	fn collection_mut(profile: &mut Profile) -> &mut ResourceCollection<Self> {
		&mut profile.languages
	}
}
