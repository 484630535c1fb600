use crate::{
	context::Context,
	data::{
		Education, Header, Interest, Language, Profile, RecordId, Resource, ResourceCollection, ResourceKind, Skill,
		WorkExperience,
	},
	error::{classify, ApiError},
	guard::{DeleteOutcome, Guard},
	route::Route,
	scope::ActivationScope,
	view::Notification,
};
use std::cell::{Cell, Ref, RefCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Unauthenticated,
	AcquiringSession,
	Authenticated,
	/// Every kind has been loaded once, successfully or not.
	Ready,
	/// No session could be recovered. The view has been sent to the login page.
	Failed,
}

/// The overview of every resource kind. Loads them side by side and owns their collections.
pub struct Dashboard {
	context: Context,
	profile: RefCell<Profile>,
	phase: Cell<Phase>,
	token: RefCell<Option<String>>,
	scope: ActivationScope,
}

impl Dashboard {
	pub fn new(context: Context) -> Self {
		Self {
			context,
			profile: RefCell::new(Profile::default()),
			phase: Cell::new(Phase::Unauthenticated),
			token: RefCell::new(None),
			scope: ActivationScope::default(),
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase.get()
	}

	pub fn profile(&self) -> Ref<'_, Profile> {
		self.profile.borrow()
	}

	/// The collection of one kind.
	pub fn collection<R: Resource>(&self) -> Ref<'_, ResourceCollection<R>> {
		Ref::map(self.profile.borrow(), R::collection)
	}

	pub fn is_ready(&self) -> bool {
		let authenticated = matches!(self.phase.get(), Phase::Authenticated | Phase::Ready);
		authenticated && !self.profile.borrow().is_loading()
	}

	/// Gets a token, silently if needed, then lists every kind concurrently.
	/// Without a token no list call is made.
	pub async fn activate(&self) -> Result<(), ApiError> {
		let token = match self.context.session.get_token() {
			Some(token) => token,
			None => {
				self.phase.set(Phase::AcquiringSession);
				match self.scope.run(self.context.session.auto_login()).await {
					Ok(token) => token,
					Err(ApiError::Cancelled) => return Err(ApiError::Cancelled),
					Err(err) => {
						log::error!(target: "dashboard", "no session available: {err}");
						self.phase.set(Phase::Failed);
						self.context.view.notify(Notification::Error(classify(&err)));
						self.context.view.navigate(Route::Login);
						return Err(err);
					}
				}
			}
		};
		self.phase.set(Phase::Authenticated);
		*self.token.borrow_mut() = Some(token.clone());
		{
			let mut profile = self.profile.borrow_mut();
			profile.headers.loading = true;
			profile.work_experiences.loading = true;
			profile.education.loading = true;
			profile.skills.loading = true;
			profile.languages.loading = true;
			profile.interests.loading = true;
		}
		self.context.view.refresh();

		futures::join!(
			self.load::<Header>(&token),
			self.load::<WorkExperience>(&token),
			self.load::<Education>(&token),
			self.load::<Skill>(&token),
			self.load::<Language>(&token),
			self.load::<Interest>(&token),
		);

		// A deactivation while loading already moved the phase on.
		if self.phase.get() == Phase::Authenticated {
			self.phase.set(Phase::Ready);
			log::info!(target: "dashboard", "profile loaded");
		}
		Ok(())
	}

	/// Lists one kind and stores the outcome in its own collection only.
	async fn load<R: Resource>(&self, token: &str) {
		R::collection_mut(&mut self.profile.borrow_mut()).loading = true;
		let gateway = self.context.gateway::<R>();
		let result = self.scope.run(gateway.list(None, token)).await;
		{
			let mut profile = self.profile.borrow_mut();
			let collection = R::collection_mut(&mut profile);
			collection.loading = false;
			match result {
				Ok(records) => collection.replace(records),
				Err(ApiError::Cancelled) => {
					log::debug!(target: "dashboard", "listing {} cancelled", R::KIND);
					return;
				}
				Err(err) => {
					let class = classify(&err);
					log::error!(target: "dashboard", "failed to list {}: {err}", R::KIND);
					collection.last_error = Some(class);
				}
			}
		}
		self.context.view.refresh();
	}

	/// Deletes through the guard, then re-reads that kind alone.
	pub async fn delete<R: Resource>(&self, id: RecordId) -> DeleteOutcome {
		let Some(token) = self.token.borrow().clone() else {
			let class = classify(&ApiError::SessionMissing);
			self.context.view.notify(Notification::Error(class.clone()));
			return DeleteOutcome::Failed(class);
		};
		let outcome = Guard::new(&self.context, &self.scope)
			.confirm_and_delete::<R>(&self.profile, id, &token)
			.await;
		if outcome == DeleteOutcome::Deleted {
			self.context.view.refresh();
			self.load::<R>(&token).await;
		}
		outcome
	}

	/// Sends the view to the editor for `kind`. Creating a second header needs confirmation,
	/// since the profile only shows one.
	pub fn open_editor(&self, kind: ResourceKind, id: Option<RecordId>) -> bool {
		let replaces_header = kind == ResourceKind::Header && id.is_none() && !self.collection::<Header>().is_empty();
		if replaces_header
			&& !self
				.context
				.view
				.confirm("A header already exists. Creating a new one will replace it. Continue?")
		{
			return false;
		}
		self.context.view.navigate(Route::editor(kind, id));
		true
	}

	pub fn logout(&self) {
		self.deactivate();
		self.context.session.logout();
		self.context.view.navigate(Route::Login);
	}

	/// Aborts everything still in flight. Collections keep whatever had already arrived.
	pub fn deactivate(&self) {
		self.scope.cancel_all();
		self.token.borrow_mut().take();
		self.phase.set(Phase::Unauthenticated);
	}
}
