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
pub struct Education {
	pub id: Option<RecordId>,
	pub degree: String,
	pub university: String,
	#[serde(with = "iso_date::option")]
	pub start_date: Option<Date>,
	#[serde(with = "iso_date::option")]
	pub end_date: Option<Date>,
}

const CREATE_OR_UPDATE: Document = Document {
	name: "CreateOrUpdateEducation",
	field: "createOrUpdateEducation",
	query: "mutation CreateOrUpdateEducation(
		$id: Int, $degree: String!, $university: String!, $startDate: Date!, $endDate: Date!
	) {
		createOrUpdateEducation(
			id: $id, degree: $degree, university: $university, startDate: $startDate, endDate: $endDate
		) { id degree university startDate endDate }
	}",
};

static OPERATIONS: Operations = Operations {
	list: Document {
		name: "GetDegrees",
		field: "degrees",
		query: "query GetDegrees($search: String) {
			degrees(search: $search) { id degree university startDate endDate }
		}",
	},
	by_id: Document {
		name: "GetDegreeById",
		field: "degreeById",
		query: "query GetDegreeById($id: Int!) { degreeById(id: $id) { id degree university startDate endDate } }",
	},
	create: CREATE_OR_UPDATE,
	update: CREATE_OR_UPDATE,
	delete: Document {
		name: "DeleteEducation",
		field: "deleteEducation",
		query: "mutation DeleteEducation($id: Int!) { deleteEducation(id: $id) { id } }",
	},
	search: Search::Optional,
};

impl Resource for Education {
	const KIND: ResourceKind = ResourceKind::Education;

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
		fields.insert("degree".into(), self.degree.clone().into());
		fields.insert("university".into(), self.university.clone().into());
		fields.insert("startDate".into(), date(&self.start_date));
		fields.insert("endDate".into(), date(&self.end_date));
		fields
	}

	fn validate(&self) -> Result<(), ValidationError> {
		ValidationError::check([
			("degree", blank(&self.degree)),
			("university", blank(&self.university)),
			("startDate", self.start_date.is_none()),
			("endDate", self.end_date.is_none()),
		])
	}

	fn collection(profile: &Profile) -> &ResourceCollection<Self> {
		&profile.education
	}

	fn collection_mut(profile: &mut Profile) -> &mut ResourceCollection<Self> {
		&mut profile.education
	}
}
