use crate::data::{RecordId, ResourceKind};
use yew_router::Routable;

/// Every place the client can navigate to. Editor routes carry the record id in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Landing,
	#[at("/home")]
	Dashboard,
	#[at("/login")]
	Login,
	#[at("/newuser")]
	NewUser,

	#[at("/header")]
	NewHeader,
	#[at("/header/:id")]
	EditHeader { id: RecordId },
	#[at("/workexperience")]
	NewWorkExperience,
	#[at("/workexperience/:id")]
	EditWorkExperience { id: RecordId },
	#[at("/education")]
	NewEducation,
	#[at("/education/:id")]
	EditEducation { id: RecordId },
	#[at("/skills")]
	NewSkill,
	#[at("/skills/:id")]
	EditSkill { id: RecordId },
	#[at("/language")]
	NewLanguage,
	#[at("/language/:id")]
	EditLanguage { id: RecordId },
	#[at("/interest")]
	NewInterest,
	#[at("/interest/:id")]
	EditInterest { id: RecordId },

	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	/// Create mode without an id, edit mode with one.
	pub fn editor(kind: ResourceKind, id: Option<RecordId>) -> Self {
		match (kind, id) {
			(ResourceKind::Header, None) => Self::NewHeader,
			(ResourceKind::Header, Some(id)) => Self::EditHeader { id },
			(ResourceKind::WorkExperience, None) => Self::NewWorkExperience,
			(ResourceKind::WorkExperience, Some(id)) => Self::EditWorkExperience { id },
			(ResourceKind::Education, None) => Self::NewEducation,
			(ResourceKind::Education, Some(id)) => Self::EditEducation { id },
			(ResourceKind::Skill, None) => Self::NewSkill,
			(ResourceKind::Skill, Some(id)) => Self::EditSkill { id },
			(ResourceKind::Language, None) => Self::NewLanguage,
			(ResourceKind::Language, Some(id)) => Self::EditLanguage { id },
			(ResourceKind::Interest, None) => Self::NewInterest,
			(ResourceKind::Interest, Some(id)) => Self::EditInterest { id },
		}
	}

	pub fn editor_target(&self) -> Option<(ResourceKind, Option<RecordId>)> {
		let target = match *self {
			Self::NewHeader => (ResourceKind::Header, None),
			Self::EditHeader { id } => (ResourceKind::Header, Some(id)),
			Self::NewWorkExperience => (ResourceKind::WorkExperience, None),
			Self::EditWorkExperience { id } => (ResourceKind::WorkExperience, Some(id)),
			Self::NewEducation => (ResourceKind::Education, None),
			Self::EditEducation { id } => (ResourceKind::Education, Some(id)),
			Self::NewSkill => (ResourceKind::Skill, None),
			Self::EditSkill { id } => (ResourceKind::Skill, Some(id)),
			Self::NewLanguage => (ResourceKind::Language, None),
			Self::EditLanguage { id } => (ResourceKind::Language, Some(id)),
			Self::NewInterest => (ResourceKind::Interest, None),
			Self::EditInterest { id } => (ResourceKind::Interest, Some(id)),
			Self::Landing | Self::Dashboard | Self::Login | Self::NewUser | Self::NotFound => return None,
		};
		Some(target)
	}

	/// Views that need a session before they can load anything.
	pub fn requires_session(&self) -> bool {
		matches!(self, Self::Dashboard) || self.editor_target().is_some()
	}
}
