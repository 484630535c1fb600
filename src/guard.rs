use crate::{
	context::Context,
	data::{Profile, RecordId, Resource},
	error::{classify, ApiError, Classification},
	scope::ActivationScope,
	view::Notification,
};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
	/// The user said no. Nothing was sent.
	Declined,
	Deleted,
	Failed(Classification),
	/// The activation ended before the server answered.
	Cancelled,
}

/// Confirm, then delete, then remove locally. Never removes anything the server has not acknowledged.
pub struct Guard<'a> {
	context: &'a Context,
	scope: &'a ActivationScope,
}

impl<'a> Guard<'a> {
	pub fn new(context: &'a Context, scope: &'a ActivationScope) -> Self {
		Self { context, scope }
	}

	pub async fn confirm_and_delete<R: Resource>(
		&self,
		profile: &RefCell<Profile>,
		id: RecordId,
		token: &str,
	) -> DeleteOutcome {
		let view = &self.context.view;
		if !view.confirm(&format!("Are you sure you want to delete this {}?", R::KIND)) {
			log::debug!(target: "guard", "delete of {} {id} declined", R::KIND);
			return DeleteOutcome::Declined;
		}

		let gateway = self.context.gateway::<R>();
		match self.scope.run(gateway.delete(id, token)).await {
			Ok(_ack) => {
				let removed = R::collection_mut(&mut profile.borrow_mut()).remove(id);
				log::info!(target: "guard", "deleted {} {id}, {removed} local entr(ies) removed", R::KIND);
				view.notify(Notification::Success(format!("The {} was deleted.", R::KIND)));
				DeleteOutcome::Deleted
			}
			Err(ApiError::Cancelled) => DeleteOutcome::Cancelled,
			Err(err) => {
				let class = classify(&err);
				log::error!(target: "guard", "failed to delete {} {id}: {err}", R::KIND);
				view.notify(Notification::Error(class.clone()));
				DeleteOutcome::Failed(class)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		data::{Skill, WorkExperience},
		error::StructuredError,
		response::Envelope,
		test_util::{block_on, signed_in, MockTransport},
	};
	use futures::{executor::LocalPool, task::LocalSpawnExt};
	use serde_json::json;
	use std::rc::Rc;

	fn profile_with_experiences(ids: &[i64]) -> RefCell<Profile> {
		let mut profile = Profile::default();
		profile.work_experiences.replace(
			ids.iter()
				.map(|id| WorkExperience {
					id: Some(RecordId(*id)),
					role: format!("role {id}"),
					..Default::default()
				})
				.collect(),
		);
		RefCell::new(profile)
	}

	#[test]
	fn declined_sends_nothing() {
		let transport = MockTransport::default();
		let (context, view) = signed_in(&transport, "T1");
		view.decline.set(true);
		let scope = ActivationScope::default();
		let profile = profile_with_experiences(&[7]);

		let outcome = block_on(Guard::new(&context, &scope).confirm_and_delete::<WorkExperience>(
			&profile,
			RecordId(7),
			"T1",
		));
		assert_eq!(outcome, DeleteOutcome::Declined);
		assert!(transport.requests().is_empty());
		assert_eq!(profile.borrow().work_experiences.len(), 1);
		assert!(view.notifications().is_empty());
	}

	#[test]
	fn acknowledged_delete_removes_only_that_entry() {
		let transport = MockTransport::default();
		transport.respond("DeleteWorkExperience", json!({ "deleteWorkExperience": { "id": 7 } }));
		let (context, view) = signed_in(&transport, "T1");
		let scope = ActivationScope::default();
		let profile = profile_with_experiences(&[3, 7, 9]);

		let outcome = block_on(Guard::new(&context, &scope).confirm_and_delete::<WorkExperience>(
			&profile,
			RecordId(7),
			"T1",
		));
		assert_eq!(outcome, DeleteOutcome::Deleted);
		let remaining: Vec<_> = profile.borrow().work_experiences.iter().filter_map(|r| r.id).collect();
		assert_eq!(remaining, vec![RecordId(3), RecordId(9)]);
		assert_eq!(transport.requests()[0].variables["id"], json!(7));
		assert!(matches!(view.notifications()[0], Notification::Success(_)));
		assert_eq!(view.prompts.borrow().len(), 1);
	}

	#[test]
	fn rejected_delete_keeps_collection() {
		let transport = MockTransport::default();
		transport.fail(
			"DeleteSkill",
			ApiError::Protocol(vec![StructuredError::from("Skill matching query does not exist.")]),
		);
		let (context, view) = signed_in(&transport, "T1");
		let scope = ActivationScope::default();
		let profile = RefCell::new(Profile::default());
		profile.borrow_mut().skills.replace(vec![Skill {
			id: Some(RecordId(4)),
			name: "Rust".into(),
			..Default::default()
		}]);

		let outcome =
			block_on(Guard::new(&context, &scope).confirm_and_delete::<Skill>(&profile, RecordId(4), "T1"));
		let expected = Classification::Protocol("Skill matching query does not exist.".into());
		assert_eq!(outcome, DeleteOutcome::Failed(expected.clone()));
		assert_eq!(profile.borrow().skills.len(), 1);
		assert_eq!(view.notifications(), vec![Notification::Error(expected)]);
	}

	#[test]
	fn unreachable_server_is_network_failure() {
		let transport = MockTransport::default();
		transport.fail("DeleteSkill", ApiError::Network("connection refused".into()));
		let (context, _view) = signed_in(&transport, "T1");
		let scope = ActivationScope::default();
		let profile = RefCell::new(Profile::default());

		let outcome =
			block_on(Guard::new(&context, &scope).confirm_and_delete::<Skill>(&profile, RecordId(4), "T1"));
		assert_eq!(outcome, DeleteOutcome::Failed(Classification::Network));
	}

	#[test]
	fn cancelled_delete_keeps_collection_and_stays_quiet() {
		let transport = MockTransport::default();
		let reply = transport.hold("DeleteWorkExperience");
		let (context, view) = signed_in(&transport, "T1");
		let scope = Rc::new(ActivationScope::default());
		let profile = Rc::new(profile_with_experiences(&[7, 9]));

		let mut pool = LocalPool::new();
		let outcome = Rc::new(RefCell::new(None));
		pool.spawner()
			.spawn_local({
				let scope = scope.clone();
				let profile = profile.clone();
				let outcome = outcome.clone();
				async move {
					let guard = Guard::new(&context, &scope);
					let result = guard.confirm_and_delete::<WorkExperience>(&profile, RecordId(7), "T1").await;
					*outcome.borrow_mut() = Some(result);
				}
			})
			.unwrap();
		pool.run_until_stalled();
		assert!(outcome.borrow().is_none());

		scope.cancel_all();
		pool.run_until_stalled();
		let _ = reply.send(Ok(Envelope::data(json!({ "deleteWorkExperience": { "id": 7 } }))));
		pool.run_until_stalled();

		assert_eq!(*outcome.borrow(), Some(DeleteOutcome::Cancelled));
		assert_eq!(WorkExperience::collection(&profile.borrow()).len(), 2);
		assert!(view.notifications().is_empty());
	}
}
