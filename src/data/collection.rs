use super::{Education, Header, Interest, Language, RecordId, Resource, Skill, WorkExperience};
use crate::error::Classification;

/// The records of one kind as last seen on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCollection<R> {
	records: Vec<R>,
	pub loading: bool,
	pub last_error: Option<Classification>,
}

impl<R> Default for ResourceCollection<R> {
	fn default() -> Self {
		Self {
			records: Vec::new(),
			loading: false,
			last_error: None,
		}
	}
}

impl<R> ResourceCollection<R>
where
	R: Resource,
{
	pub fn records(&self) -> &[R] {
		&self.records
	}

	pub fn iter(&self) -> std::slice::Iter<'_, R> {
		self.records.iter()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn get(&self, id: RecordId) -> Option<&R> {
		self.records.iter().find(|record| record.id() == Some(id))
	}

	pub fn replace(&mut self, records: Vec<R>) {
		self.records = records;
		self.last_error = None;
	}

	/// Drops the record with this identity, returning how many entries were removed.
	pub fn remove(&mut self, id: RecordId) -> usize {
		let before = self.records.len();
		self.records.retain(|record| record.id() != Some(id));
		before - self.records.len()
	}
}

/// Every collection the dashboard shows. Each kind only ever writes its own field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
	pub headers: ResourceCollection<Header>,
	pub work_experiences: ResourceCollection<WorkExperience>,
	pub education: ResourceCollection<Education>,
	pub skills: ResourceCollection<Skill>,
	pub languages: ResourceCollection<Language>,
	pub interests: ResourceCollection<Interest>,
}

impl Profile {
	pub fn is_loading(&self) -> bool {
		self.headers.loading
			|| self.work_experiences.loading
			|| self.education.loading
			|| self.skills.loading
			|| self.languages.loading
			|| self.interests.loading
	}
}
