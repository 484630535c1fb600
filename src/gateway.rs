use crate::{
	api::{Client, GraphqlRequest, Operation},
	data::{RecordId, Resource},
	error::ApiError,
	response::take_field,
};
use serde::Deserialize;
use std::{marker::PhantomData, rc::Rc};

/// One GraphQL document and the `data` key its result comes back under.
#[derive(Debug)]
pub struct Document {
	pub name: &'static str,
	pub field: &'static str,
	pub query: &'static str,
}

/// How a kind's list query takes its `search` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Search {
	Unsupported,
	/// Nullable; `null` lists everything.
	Optional,
	/// Mandatory; the match-all filter lists everything.
	Required,
}

/// The request templates of one resource kind.
/// Every document that takes an identity declares it as `$id`.
#[derive(Debug)]
pub struct Operations {
	pub list: Document,
	pub by_id: Document,
	pub create: Document,
	pub update: Document,
	pub delete: Document,
	pub search: Search,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Acknowledgment {
	#[serde(default)]
	pub id: Option<RecordId>,
}

/// Uniform CRUD for one resource kind. Every call requires the caller to already hold a token.
#[derive(Debug, Clone)]
pub struct Gateway<R> {
	client: Client,
	match_all: Rc<str>,
	marker: PhantomData<R>,
}

impl<R> Gateway<R>
where
	R: Resource,
{
	pub fn new(client: Client, match_all: impl Into<Rc<str>>) -> Self {
		Self {
			client,
			match_all: match_all.into(),
			marker: PhantomData,
		}
	}

	pub async fn list(&self, filter: Option<&str>, token: &str) -> Result<Vec<R>, ApiError> {
		let ops = R::operations();
		let mut request = GraphqlRequest::new(Operation::List, ops.list.name, ops.list.query).with_token(token);
		match ops.search {
			Search::Unsupported => {}
			Search::Optional => request = request.with_variable("search", filter),
			Search::Required => request = request.with_variable("search", filter.unwrap_or(&self.match_all)),
		}
		let mut data = self.client.send(request).await?;
		let records = take_field::<Option<Vec<R>>>(&mut data, ops.list.field)?.unwrap_or_default();
		log::debug!(target: "gateway", "listed {} {} record(s)", records.len(), R::KIND);
		Ok(records)
	}

	pub async fn get_by_id(&self, id: RecordId, token: &str) -> Result<R, ApiError> {
		let ops = R::operations();
		let request = GraphqlRequest::new(Operation::ById, ops.by_id.name, ops.by_id.query)
			.with_token(token)
			.with_variable("id", id);
		let mut data = self.client.send(request).await?;
		let record = take_field::<Option<R>>(&mut data, ops.by_id.field)?;
		record.ok_or(ApiError::NotFound { kind: R::KIND, id })
	}

	/// Updates when the draft carries an identity, creates otherwise. Never both.
	pub async fn create_or_update(&self, draft: &R, token: &str) -> Result<R, ApiError> {
		let ops = R::operations();
		let (operation, document) = match draft.id() {
			Some(_) => (Operation::Update, &ops.update),
			None => (Operation::Create, &ops.create),
		};
		let mut request = GraphqlRequest::new(operation, document.name, document.query)
			.with_token(token)
			.with_variables(draft.fields());
		if let Some(id) = draft.id() {
			request = request.with_variable("id", id);
		}
		let mut data = self.client.send(request).await?;
		let Some(mut record) = take_field::<Option<R>>(&mut data, document.field)? else {
			return Err(ApiError::Unknown(format!("{} returned no {}", document.name, R::KIND)));
		};
		if record.id().is_none() {
			record.set_id(draft.id());
		}
		log::info!(target: "gateway", "saved {} {:?}", R::KIND, record.id());
		Ok(record)
	}

	pub async fn delete(&self, id: RecordId, token: &str) -> Result<Acknowledgment, ApiError> {
		let ops = R::operations();
		let request = GraphqlRequest::new(Operation::Delete, ops.delete.name, ops.delete.query)
			.with_token(token)
			.with_variable("id", id);
		let mut data = self.client.send(request).await?;
		let ack = take_field::<Option<Acknowledgment>>(&mut data, ops.delete.field)?;
		let ack = ack.ok_or(ApiError::NotFound { kind: R::KIND, id })?;
		log::info!(target: "gateway", "deleted {} {id}", R::KIND);
		Ok(ack)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		data::{Education, Header, Interest, Language, Skill, WorkExperience},
		test_util::{block_on, keyed, MockTransport},
	};
	use serde_json::{json, Value};

	fn gateway<R: Resource>(transport: &MockTransport) -> Gateway<R> {
		Gateway::new(transport.client(), "*")
	}

	fn check_dispatch_rule<R: Resource>() {
		let ops = R::operations();
		let transport = MockTransport::default();
		transport.respond(ops.create.name, keyed(ops.create.field, json!({ "id": 11 })));
		transport.respond(ops.update.name, keyed(ops.update.field, json!({ "id": 5 })));
		let gateway = gateway::<R>(&transport);

		let created = block_on(gateway.create_or_update(&R::default(), "T1")).unwrap();
		assert_eq!(created.id(), Some(RecordId(11)));

		let mut existing = R::default();
		existing.set_id(Some(RecordId(5)));
		block_on(gateway.create_or_update(&existing, "T1")).unwrap();

		let sent = transport.requests();
		assert_eq!(sent.len(), 2, "{}", R::KIND);
		assert_eq!(sent[0].operation, Operation::Create);
		assert!(!sent[0].variables.contains_key("id"), "{} create carried an id", R::KIND);
		assert_eq!(sent[1].operation, Operation::Update);
		assert_eq!(sent[1].variables["id"], json!(5));
		assert!(sent.iter().all(|request| request.token.as_deref() == Some("T1")));
	}

	#[test]
	fn identity_selects_create_or_update_for_every_kind() {
		check_dispatch_rule::<Header>();
		check_dispatch_rule::<WorkExperience>();
		check_dispatch_rule::<Education>();
		check_dispatch_rule::<Skill>();
		check_dispatch_rule::<Language>();
		check_dispatch_rule::<Interest>();
	}

	#[test]
	fn new_skill_sends_exactly_its_fields() {
		let transport = MockTransport::default();
		transport.respond(
			"CreateSkill",
			json!({ "createSkill": { "id": 3, "name": "Go", "level": "Beginner", "description": "Learning Go" } }),
		);
		let draft = Skill {
			id: None,
			name: "Go".into(),
			level: "Beginner".into(),
			description: "Learning Go".into(),
		};
		let saved = block_on(gateway::<Skill>(&transport).create_or_update(&draft, "T1")).unwrap();
		assert_eq!(saved.id, Some(RecordId(3)));
		let sent = transport.requests();
		assert_eq!(sent[0].operation_name, "CreateSkill");
		assert_eq!(
			Value::Object(sent[0].variables.clone()),
			json!({ "name": "Go", "level": "Beginner", "description": "Learning Go" })
		);
	}

	#[test]
	fn optional_header_fields_go_out_as_null() {
		let transport = MockTransport::default();
		transport.respond("UpdateHeader", json!({ "updateHeader": { "id": 2, "name": "Ada" } }));
		let draft = Header {
			id: Some(RecordId(2)),
			name: "Ada".into(),
			description: "Engineer".into(),
			email: "ada@example.com".into(),
			phone_number: Some(String::new()),
			..Default::default()
		};
		block_on(gateway::<Header>(&transport).create_or_update(&draft, "T1")).unwrap();
		let variables = &transport.requests()[0].variables;
		for field in ["imageUrl", "phoneNumber", "location", "github"] {
			assert_eq!(variables[field], Value::Null, "{field}");
		}
	}

	#[test]
	fn list_applies_search_policy() {
		let transport = MockTransport::default();
		transport.respond("GetHeaders", json!({ "headers": [{ "id": 1, "name": "Ada" }] }));
		transport.respond("GetLanguages", json!({ "languages": null }));
		transport.respond("GetSkills", json!({ "skills": [] }));

		let headers = block_on(gateway::<Header>(&transport).list(None, "T1")).unwrap();
		assert_eq!(headers.len(), 1);
		let languages = block_on(gateway::<Language>(&transport).list(None, "T1")).unwrap();
		assert!(languages.is_empty());
		block_on(gateway::<Skill>(&transport).list(Some("ignored"), "T1")).unwrap();

		let sent = transport.requests();
		assert_eq!(sent[0].variables["search"], json!("*"));
		assert_eq!(sent[1].variables["search"], Value::Null);
		assert!(!sent[2].variables.contains_key("search"));
	}

	#[test]
	fn missing_record_is_not_found() {
		let transport = MockTransport::default();
		transport.respond("GetSkillById", json!({ "skillById": null }));
		let err = block_on(gateway::<Skill>(&transport).get_by_id(RecordId(9), "T1")).unwrap_err();
		assert!(matches!(err, ApiError::NotFound { id: RecordId(9), .. }));
		assert_eq!(transport.requests()[0].variables["id"], json!(9));
	}

	#[test]
	fn delete_sends_identity() {
		let transport = MockTransport::default();
		transport.respond("DeleteWorkExperience", json!({ "deleteWorkExperience": { "id": 7 } }));
		let ack = block_on(gateway::<WorkExperience>(&transport).delete(RecordId(7), "T1")).unwrap();
		assert_eq!(ack.id, Some(RecordId(7)));
		let sent = transport.requests();
		assert_eq!(sent[0].operation, Operation::Delete);
		assert_eq!(sent[0].variables["id"], json!(7));
	}
}
