//! Pure mutators over [`Resume`] and the `EditOp` wire form the page sends.
//!
//! Every mutator takes `&self` and returns a new document. Branches the edit
//! does not touch are carried over by `Arc` clone, so they stay pointer-equal
//! to the previous snapshot. An edit addressed at a missing entry or item
//! index is a no-op and returns a document equal to the input.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    Certification, CertificationUpdate, CustomSection, CustomSectionUpdate, Education,
    EducationUpdate, Entry, EntryId, PersonalInfoUpdate, Project, ProjectUpdate, Resume, Skill,
    SkillUpdate, WorkExperience, WorkExperienceUpdate,
};

/// The six list-backed sections of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    WorkExperience,
    Education,
    Skills,
    Certifications,
    Projects,
    CustomSections,
}

impl ListKind {
    pub const ALL: [ListKind; 6] = [
        ListKind::WorkExperience,
        ListKind::Education,
        ListKind::Skills,
        ListKind::Certifications,
        ListKind::Projects,
        ListKind::CustomSections,
    ];
}

impl Resume {
    #[cfg(test)]
    pub fn len_of(&self, list: ListKind) -> usize {
        match list {
            ListKind::WorkExperience => self.work_experience.len(),
            ListKind::Education => self.education.len(),
            ListKind::Skills => self.skills.len(),
            ListKind::Certifications => self.certifications.len(),
            ListKind::Projects => self.projects.len(),
            ListKind::CustomSections => self.custom_sections.len(),
        }
    }

    pub fn has_entry(&self, list: ListKind, id: EntryId) -> bool {
        match list {
            ListKind::WorkExperience => self.work_experience.get(id).is_some(),
            ListKind::Education => self.education.get(id).is_some(),
            ListKind::Skills => self.skills.get(id).is_some(),
            ListKind::Certifications => self.certifications.get(id).is_some(),
            ListKind::Projects => self.projects.get(id).is_some(),
            ListKind::CustomSections => self.custom_sections.get(id).is_some(),
        }
    }

    fn has_section_item(&self, section_id: EntryId, index: usize) -> bool {
        self.custom_sections
            .get(section_id)
            .is_some_and(|section| index < section.items.len())
    }

    pub fn with_personal(&self, update: PersonalInfoUpdate) -> Resume {
        let mut info = self.personal_info.as_ref().clone();
        info.apply(update);
        Resume {
            personal_info: Arc::new(info),
            ..self.clone()
        }
    }

    /// Appends a blank entry with a fresh identifier to `list`.
    pub fn add(&self, list: ListKind) -> Resume {
        self.add_with_id(list, EntryId::new())
    }

    fn add_with_id(&self, list: ListKind, id: EntryId) -> Resume {
        let mut next = self.clone();
        match list {
            ListKind::WorkExperience => {
                next.work_experience = self.work_experience.push(WorkExperience::blank(id))
            }
            ListKind::Education => next.education = self.education.push(Education::blank(id)),
            ListKind::Skills => next.skills = self.skills.push(Skill::blank(id)),
            ListKind::Certifications => {
                next.certifications = self.certifications.push(Certification::blank(id))
            }
            ListKind::Projects => next.projects = self.projects.push(Project::blank(id)),
            ListKind::CustomSections => {
                next.custom_sections = self.custom_sections.push(CustomSection::blank(id))
            }
        }
        next
    }

    pub fn remove(&self, list: ListKind, id: EntryId) -> Resume {
        let mut next = self.clone();
        match list {
            ListKind::WorkExperience => next.work_experience = self.work_experience.remove(id),
            ListKind::Education => next.education = self.education.remove(id),
            ListKind::Skills => next.skills = self.skills.remove(id),
            ListKind::Certifications => next.certifications = self.certifications.remove(id),
            ListKind::Projects => next.projects = self.projects.remove(id),
            ListKind::CustomSections => next.custom_sections = self.custom_sections.remove(id),
        }
        next
    }

    pub fn update_work_experience(&self, id: EntryId, update: WorkExperienceUpdate) -> Resume {
        Resume {
            work_experience: self.work_experience.update(id, update),
            ..self.clone()
        }
    }

    pub fn update_education(&self, id: EntryId, update: EducationUpdate) -> Resume {
        Resume {
            education: self.education.update(id, update),
            ..self.clone()
        }
    }

    pub fn update_skill(&self, id: EntryId, update: SkillUpdate) -> Resume {
        Resume {
            skills: self.skills.update(id, update),
            ..self.clone()
        }
    }

    pub fn update_certification(&self, id: EntryId, update: CertificationUpdate) -> Resume {
        Resume {
            certifications: self.certifications.update(id, update),
            ..self.clone()
        }
    }

    pub fn update_project(&self, id: EntryId, update: ProjectUpdate) -> Resume {
        Resume {
            projects: self.projects.update(id, update),
            ..self.clone()
        }
    }

    pub fn update_custom_section(&self, id: EntryId, update: CustomSectionUpdate) -> Resume {
        Resume {
            custom_sections: self.custom_sections.update(id, update),
            ..self.clone()
        }
    }

    pub fn add_section_item(&self, section_id: EntryId) -> Resume {
        Resume {
            custom_sections: self
                .custom_sections
                .replace_with(section_id, |s| Some(s.with_item_added())),
            ..self.clone()
        }
    }

    /// Positional: `index` must be taken from the latest render of the section.
    pub fn update_section_item(&self, section_id: EntryId, index: usize, value: String) -> Resume {
        Resume {
            custom_sections: self
                .custom_sections
                .replace_with(section_id, |s| s.with_item(index, value)),
            ..self.clone()
        }
    }

    pub fn remove_section_item(&self, section_id: EntryId, index: usize) -> Resume {
        Resume {
            custom_sections: self
                .custom_sections
                .replace_with(section_id, |s| s.without_item(index)),
            ..self.clone()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire form
// ────────────────────────────────────────────────────────────────────────────

/// One user edit, as posted by the editor page.
///
/// ```json
/// { "op": "update_work_experience", "id": "…", "field": { "current": true } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    SetPersonal {
        field: PersonalInfoUpdate,
    },
    Add {
        list: ListKind,
    },
    Remove {
        list: ListKind,
        id: EntryId,
    },
    UpdateWorkExperience {
        id: EntryId,
        field: WorkExperienceUpdate,
    },
    UpdateEducation {
        id: EntryId,
        field: EducationUpdate,
    },
    UpdateSkill {
        id: EntryId,
        field: SkillUpdate,
    },
    UpdateCertification {
        id: EntryId,
        field: CertificationUpdate,
    },
    UpdateProject {
        id: EntryId,
        field: ProjectUpdate,
    },
    UpdateCustomSection {
        id: EntryId,
        field: CustomSectionUpdate,
    },
    AddSectionItem {
        section_id: EntryId,
    },
    UpdateSectionItem {
        section_id: EntryId,
        index: usize,
        value: String,
    },
    RemoveSectionItem {
        section_id: EntryId,
        index: usize,
    },
}

impl EditOp {
    pub fn apply(&self, resume: &Resume) -> Resume {
        match self.clone() {
            EditOp::SetPersonal { field } => resume.with_personal(field),
            EditOp::Add { list } => resume.add(list),
            EditOp::Remove { list, id } => resume.remove(list, id),
            EditOp::UpdateWorkExperience { id, field } => resume.update_work_experience(id, field),
            EditOp::UpdateEducation { id, field } => resume.update_education(id, field),
            EditOp::UpdateSkill { id, field } => resume.update_skill(id, field),
            EditOp::UpdateCertification { id, field } => resume.update_certification(id, field),
            EditOp::UpdateProject { id, field } => resume.update_project(id, field),
            EditOp::UpdateCustomSection { id, field } => resume.update_custom_section(id, field),
            EditOp::AddSectionItem { section_id } => resume.add_section_item(section_id),
            EditOp::UpdateSectionItem {
                section_id,
                index,
                value,
            } => resume.update_section_item(section_id, index, value),
            EditOp::RemoveSectionItem { section_id, index } => {
                resume.remove_section_item(section_id, index)
            }
        }
    }

    /// False when the op names an entry or item index `resume` does not have.
    pub fn addresses_existing(&self, resume: &Resume) -> bool {
        match self {
            EditOp::SetPersonal { .. } | EditOp::Add { .. } => true,
            EditOp::Remove { list, id } => resume.has_entry(*list, *id),
            EditOp::UpdateWorkExperience { id, .. } => {
                resume.has_entry(ListKind::WorkExperience, *id)
            }
            EditOp::UpdateEducation { id, .. } => resume.has_entry(ListKind::Education, *id),
            EditOp::UpdateSkill { id, .. } => resume.has_entry(ListKind::Skills, *id),
            EditOp::UpdateCertification { id, .. } => {
                resume.has_entry(ListKind::Certifications, *id)
            }
            EditOp::UpdateProject { id, .. } => resume.has_entry(ListKind::Projects, *id),
            EditOp::UpdateCustomSection { id, .. } | EditOp::AddSectionItem { section_id: id } => {
                resume.has_entry(ListKind::CustomSections, *id)
            }
            EditOp::UpdateSectionItem {
                section_id, index, ..
            }
            | EditOp::RemoveSectionItem { section_id, index } => {
                resume.has_section_item(*section_id, *index)
            }
        }
    }

    /// True when the editor form has to be rebuilt after this op: rows or
    /// bullet inputs appear or disappear, or an end-date input changes its
    /// disabled state. Plain text edits only refresh the preview.
    pub fn reshapes_editor(&self) -> bool {
        matches!(
            self,
            EditOp::Add { .. }
                | EditOp::Remove { .. }
                | EditOp::AddSectionItem { .. }
                | EditOp::RemoveSectionItem { .. }
                | EditOp::UpdateWorkExperience {
                    field: WorkExperienceUpdate::Current(_),
                    ..
                }
                | EditOp::UpdateEducation {
                    field: EducationUpdate::Current(_),
                    ..
                }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditOp::SetPersonal { .. } => "set_personal",
            EditOp::Add { .. } => "add",
            EditOp::Remove { .. } => "remove",
            EditOp::UpdateWorkExperience { .. } => "update_work_experience",
            EditOp::UpdateEducation { .. } => "update_education",
            EditOp::UpdateSkill { .. } => "update_skill",
            EditOp::UpdateCertification { .. } => "update_certification",
            EditOp::UpdateProject { .. } => "update_project",
            EditOp::UpdateCustomSection { .. } => "update_custom_section",
            EditOp::AddSectionItem { .. } => "add_section_item",
            EditOp::UpdateSectionItem { .. } => "update_section_item",
            EditOp::RemoveSectionItem { .. } => "remove_section_item",
        }
    }
}
