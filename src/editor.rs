use crate::{
	context::Context,
	data::{RecordId, Resource, ResourceCollection},
	error::{classify, ApiError},
	route::Route,
	scope::ActivationScope,
	view::Notification,
};
use std::cell::{Ref, RefCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
	Create,
	Edit(RecordId),
}

/// The draft a user is typing into, and whether saving it creates or updates.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm<R> {
	draft: R,
	mode: FormMode,
}

impl<R> Default for EditForm<R>
where
	R: Resource,
{
	fn default() -> Self {
		Self {
			draft: R::default(),
			mode: FormMode::Create,
		}
	}
}

impl<R> EditForm<R>
where
	R: Resource,
{
	pub fn edit(record: R, id: RecordId) -> Self {
		Self {
			draft: record,
			mode: FormMode::Edit(id),
		}
	}

	pub fn draft(&self) -> &R {
		&self.draft
	}

	pub fn draft_mut(&mut self) -> &mut R {
		&mut self.draft
	}

	pub fn mode(&self) -> FormMode {
		self.mode
	}

	pub fn current_id(&self) -> Option<RecordId> {
		match self.mode {
			FormMode::Create => None,
			FormMode::Edit(id) => Some(id),
		}
	}

	pub fn is_edit_mode(&self) -> bool {
		self.current_id().is_some()
	}

	/// The record to send. Its identity always comes from the mode, whatever the draft says.
	pub fn to_draft(&self) -> R {
		let mut draft = self.draft.clone();
		draft.set_id(self.current_id());
		draft
	}
}

/// Create or edit one record of kind `R`, next to the list of existing ones.
pub struct Editor<R> {
	context: Context,
	form: RefCell<EditForm<R>>,
	records: RefCell<ResourceCollection<R>>,
	scope: ActivationScope,
}

impl<R> Editor<R>
where
	R: Resource,
{
	pub fn new(context: Context) -> Self {
		Self {
			context,
			form: RefCell::new(EditForm::default()),
			records: RefCell::new(ResourceCollection::default()),
			scope: ActivationScope::default(),
		}
	}

	pub fn form(&self) -> Ref<'_, EditForm<R>> {
		self.form.borrow()
	}

	pub fn records(&self) -> Ref<'_, ResourceCollection<R>> {
		self.records.borrow()
	}

	pub fn update(&self, edit: impl FnOnce(&mut R)) {
		edit(self.form.borrow_mut().draft_mut());
	}

	pub fn reset(&self) {
		*self.form.borrow_mut() = EditForm::default();
	}

	fn require_token(&self) -> Result<String, ApiError> {
		match self.context.session.get_token() {
			Some(token) => Ok(token),
			None => {
				log::warn!(target: "editor", "no session, leaving the {} editor", R::KIND);
				self.context.view.navigate(Route::Login);
				Err(ApiError::SessionMissing)
			}
		}
	}

	/// Loads the existing records and, with an `id`, the record to edit.
	pub async fn activate(&self, id: Option<RecordId>) -> Result<(), ApiError> {
		let token = self.require_token()?;
		match id {
			Some(id) => *self.form.borrow_mut() = EditForm::edit(R::default(), id),
			None => self.reset(),
		}

		let gateway = self.context.gateway::<R>();
		let fetch_record = async {
			match id {
				Some(id) => self.scope.run(gateway.get_by_id(id, &token)).await.map(Some),
				None => Ok(None),
			}
		};
		let (record, listed) = futures::join!(fetch_record, self.fetch_list(&token));
		if matches!(record, Err(ApiError::Cancelled)) || listed.is_err() {
			return Err(ApiError::Cancelled);
		}

		match record {
			Ok(Some(record)) => {
				if let Some(id) = id {
					*self.form.borrow_mut() = EditForm::edit(record, id);
				}
			}
			Ok(None) => {}
			Err(err) => {
				log::error!(target: "editor", "failed to load {}: {err}", R::KIND);
				self.context.view.notify(Notification::Error(classify(&err)));
				return Err(err);
			}
		}
		self.context.view.refresh();
		Ok(())
	}

	/// Fails only when the activation was cancelled. Other failures land in `last_error`.
	async fn fetch_list(&self, token: &str) -> Result<(), ApiError> {
		self.records.borrow_mut().loading = true;
		let gateway = self.context.gateway::<R>();
		let result = self.scope.run(gateway.list(None, token)).await;
		{
			let mut records = self.records.borrow_mut();
			records.loading = false;
			match result {
				Ok(list) => records.replace(list),
				Err(ApiError::Cancelled) => {
					log::debug!(target: "editor", "listing {} cancelled", R::KIND);
					return Err(ApiError::Cancelled);
				}
				Err(err) => {
					log::error!(target: "editor", "failed to list {}: {err}", R::KIND);
					records.last_error = Some(classify(&err));
				}
			}
		}
		self.context.view.refresh();
		Ok(())
	}

	/// Validates, then creates or updates depending on the form's mode.
	/// On success the form is emptied and the list re-read.
	pub async fn save(&self) -> Result<R, ApiError> {
		let token = self.require_token()?;
		let (draft, updating) = {
			let form = self.form.borrow();
			(form.to_draft(), form.is_edit_mode())
		};
		if let Err(err) = draft.validate() {
			let err = ApiError::from(err);
			log::debug!(target: "editor", "{} not sent: {err}", R::KIND);
			self.context.view.notify(Notification::Error(classify(&err)));
			return Err(err);
		}

		let gateway = self.context.gateway::<R>();
		let saved = match self.scope.run(gateway.create_or_update(&draft, &token)).await {
			Ok(saved) => saved,
			Err(ApiError::Cancelled) => return Err(ApiError::Cancelled),
			Err(err) => {
				log::error!(target: "editor", "failed to save {}: {err}", R::KIND);
				self.context.view.notify(Notification::Error(classify(&err)));
				return Err(err);
			}
		};

		let verb = if updating { "updated" } else { "created" };
		self.context.view.notify(Notification::Success(format!("The {} was {verb}.", R::KIND)));
		self.reset();
		if updating {
			self.context.view.navigate(Route::editor(R::KIND, None));
		}
		// Only fails if the editor was closed after the save landed.
		let _ = self.fetch_list(&token).await;
		Ok(saved)
	}

	/// Cancels whatever is still pending and drops the draft.
	pub fn deactivate(&self) {
		self.scope.cancel_all();
		self.reset();
	}
}
