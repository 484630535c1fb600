use crate::{
	context::Context,
	dashboard::Dashboard,
	data::{Education, Header, Interest, Language, RecordId, ResourceKind, Skill, WorkExperience},
	editor::Editor,
	error::ApiError,
	route::Route,
};
use std::rc::Rc;

/// The controller behind whatever route is mounted.
#[derive(Clone)]
pub enum Screen {
	Dashboard(Rc<Dashboard>),
	Header(Rc<Editor<Header>>, Option<RecordId>),
	WorkExperience(Rc<Editor<WorkExperience>>, Option<RecordId>),
	Education(Rc<Editor<Education>>, Option<RecordId>),
	Skill(Rc<Editor<Skill>>, Option<RecordId>),
	Language(Rc<Editor<Language>>, Option<RecordId>),
	Interest(Rc<Editor<Interest>>, Option<RecordId>),
	/// Landing, login and sign-up pages load nothing.
	Static(Route),
}

impl Screen {
	pub fn for_route(route: Route, context: &Context) -> Self {
		if route == Route::Dashboard {
			return Self::Dashboard(Rc::new(Dashboard::new(context.clone())));
		}
		let Some((kind, id)) = route.editor_target() else {
			return Self::Static(route);
		};
		let context = context.clone();
		match kind {
			ResourceKind::Header => Self::Header(Rc::new(Editor::new(context)), id),
			ResourceKind::WorkExperience => Self::WorkExperience(Rc::new(Editor::new(context)), id),
			ResourceKind::Education => Self::Education(Rc::new(Editor::new(context)), id),
			ResourceKind::Skill => Self::Skill(Rc::new(Editor::new(context)), id),
			ResourceKind::Language => Self::Language(Rc::new(Editor::new(context)), id),
			ResourceKind::Interest => Self::Interest(Rc::new(Editor::new(context)), id),
		}
	}

	pub async fn activate(&self) -> Result<(), ApiError> {
		match self {
			Self::Dashboard(dashboard) => dashboard.activate().await,
			Self::Header(editor, id) => editor.activate(*id).await,
			Self::WorkExperience(editor, id) => editor.activate(*id).await,
			Self::Education(editor, id) => editor.activate(*id).await,
			Self::Skill(editor, id) => editor.activate(*id).await,
			Self::Language(editor, id) => editor.activate(*id).await,
			Self::Interest(editor, id) => editor.activate(*id).await,
			Self::Static(_) => Ok(()),
		}
	}

	pub fn deactivate(&self) {
		match self {
			Self::Dashboard(dashboard) => dashboard.deactivate(),
			Self::Header(editor, _) => editor.deactivate(),
			Self::WorkExperience(editor, _) => editor.deactivate(),
			Self::Education(editor, _) => editor.deactivate(),
			Self::Skill(editor, _) => editor.deactivate(),
			Self::Language(editor, _) => editor.deactivate(),
			Self::Interest(editor, _) => editor.deactivate(),
			Self::Static(_) => {}
		}
	}

	/// Activates on the browser's event loop.
	#[cfg(target_family = "wasm")]
	pub fn spawn_activate(&self) {
		let screen = self.clone();
		crate::util::spawn_local("screen", async move { screen.activate().await });
	}
}
