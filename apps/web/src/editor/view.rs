//! The editor form: one control per scalar field, one block per list entry.
//!
//! The form is described here as data (`EditorModel`) and drawn by
//! `editor.html`. Every control carries the op name, entry id and field key
//! the page script needs to post an [`EditOp`](super::ops::EditOp). Item
//! indexes are recomputed on every render.

use serde::Serialize;

use crate::editor::ops::ListKind;
use crate::errors::AppError;
use crate::models::resume::{
    Certification, CustomSection, Education, EntryId, PersonalInfo, Project, Resume, Skill,
    WorkExperience,
};
use crate::views::Views;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Url,
    Textarea,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldControl {
    pub field: &'static str,
    pub input: InputKind,
    pub placeholder: &'static str,
    /// Checkbox caption; text inputs rely on the placeholder.
    pub label: Option<&'static str>,
    pub value: String,
    pub checked: bool,
    pub disabled: bool,
    pub rows: Option<u8>,
}

impl FieldControl {
    fn text(field: &'static str, placeholder: &'static str, value: &str) -> Self {
        Self {
            field,
            input: InputKind::Text,
            placeholder,
            label: None,
            value: value.to_string(),
            checked: false,
            disabled: false,
            rows: None,
        }
    }

    fn typed(mut self, input: InputKind) -> Self {
        self.input = input;
        self
    }

    fn textarea(field: &'static str, placeholder: &'static str, value: &str, rows: u8) -> Self {
        Self {
            rows: Some(rows),
            ..Self::text(field, placeholder, value).typed(InputKind::Textarea)
        }
    }

    fn checkbox(field: &'static str, label: &'static str, checked: bool) -> Self {
        Self {
            label: Some(label),
            checked,
            ..Self::text(field, "", "").typed(InputKind::Checkbox)
        }
    }

    fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemControl {
    pub index: usize,
    pub placeholder: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryBlock {
    pub id: EntryId,
    pub controls: Vec<FieldControl>,
    /// Bullet inputs; only custom sections have them.
    pub items: Option<Vec<ItemControl>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListBlock {
    pub list: ListKind,
    pub title: &'static str,
    /// Op posted by the controls inside this block, e.g. `update_skill`.
    pub update_op: &'static str,
    pub entries: Vec<EntryBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorModel {
    pub personal: Vec<FieldControl>,
    pub lists: Vec<ListBlock>,
}

pub fn editor_model(resume: &Resume) -> EditorModel {
    EditorModel {
        personal: personal_controls(&resume.personal_info),
        lists: ListKind::ALL
            .into_iter()
            .map(|list| list_block(resume, list))
            .collect(),
    }
}

fn list_block(resume: &Resume, list: ListKind) -> ListBlock {
    let (title, update_op, entries) = match list {
        ListKind::WorkExperience => (
            "Work Experience",
            "update_work_experience",
            resume.work_experience.iter().map(work_block).collect(),
        ),
        ListKind::Education => (
            "Education",
            "update_education",
            resume.education.iter().map(education_block).collect(),
        ),
        ListKind::Skills => (
            "Skills",
            "update_skill",
            resume.skills.iter().map(skill_block).collect(),
        ),
        ListKind::Certifications => (
            "Certifications",
            "update_certification",
            resume.certifications.iter().map(certification_block).collect(),
        ),
        ListKind::Projects => (
            "Projects",
            "update_project",
            resume.projects.iter().map(project_block).collect(),
        ),
        ListKind::CustomSections => (
            "Custom Sections",
            "update_custom_section",
            resume.custom_sections.iter().map(custom_block).collect(),
        ),
    };
    ListBlock {
        list,
        title,
        update_op,
        entries,
    }
}

pub fn render_editor(views: &Views, resume: &Resume) -> Result<String, AppError> {
    views.render("editor.html", editor_model(resume))
}

fn personal_controls(info: &PersonalInfo) -> Vec<FieldControl> {
    vec![
        FieldControl::text("full_name", "Full Name", &info.full_name),
        FieldControl::text("email", "Email", &info.email).typed(InputKind::Email),
        FieldControl::text("phone", "Phone", &info.phone).typed(InputKind::Tel),
        FieldControl::text("location", "Location", &info.location),
        FieldControl::text("portfolio", "Portfolio/Website URL", &info.portfolio)
            .typed(InputKind::Url),
        FieldControl::textarea("summary", "Professional Summary", &info.summary, 4),
        FieldControl::textarea("hobbies", "Hobbies & Interests", &info.hobbies, 3),
    ]
}

fn work_block(exp: &WorkExperience) -> EntryBlock {
    EntryBlock {
        id: exp.id,
        controls: vec![
            FieldControl::text("company", "Company", &exp.company),
            FieldControl::text("position", "Position", &exp.position),
            FieldControl::text("start_date", "Start Date (e.g., Jan 2020)", &exp.start_date),
            FieldControl::text("end_date", "End Date", &exp.end_date).disabled_if(exp.current),
            FieldControl::checkbox("current", "Currently working here", exp.current),
            FieldControl::textarea(
                "description",
                "Job description and achievements",
                &exp.description,
                3,
            ),
        ],
        items: None,
    }
}

fn education_block(edu: &Education) -> EntryBlock {
    EntryBlock {
        id: edu.id,
        controls: vec![
            FieldControl::text("institution", "Institution", &edu.institution),
            FieldControl::text("degree", "Degree (e.g., Bachelor of Science)", &edu.degree),
            FieldControl::text("field", "Field of Study", &edu.field),
            FieldControl::text("start_date", "Start Date", &edu.start_date),
            FieldControl::text("end_date", "End Date", &edu.end_date).disabled_if(edu.current),
            FieldControl::checkbox("current", "Currently studying here", edu.current),
        ],
        items: None,
    }
}

fn skill_block(skill: &Skill) -> EntryBlock {
    EntryBlock {
        id: skill.id,
        controls: vec![FieldControl::text("name", "Skill name", &skill.name)],
        items: None,
    }
}

fn certification_block(cert: &Certification) -> EntryBlock {
    EntryBlock {
        id: cert.id,
        controls: vec![
            FieldControl::text("name", "Certification Name", &cert.name),
            FieldControl::text("issuer", "Issuer", &cert.issuer),
            FieldControl::text("date", "Date (e.g., Jan 2023)", &cert.date),
        ],
        items: None,
    }
}

fn project_block(project: &Project) -> EntryBlock {
    EntryBlock {
        id: project.id,
        controls: vec![
            FieldControl::text("title", "Project Title", &project.title),
            FieldControl::textarea("description", "Project Description", &project.description, 3),
            FieldControl::text("link", "Project Link (optional)", &project.link)
                .typed(InputKind::Url),
            FieldControl::text(
                "technologies",
                "Technologies Used (optional)",
                &project.technologies,
            ),
        ],
        items: None,
    }
}

fn custom_block(section: &CustomSection) -> EntryBlock {
    EntryBlock {
        id: section.id,
        controls: vec![FieldControl::text(
            "title",
            "Section Title (e.g., Languages, Awards)",
            &section.title,
        )],
        items: Some(
            section
                .items
                .iter()
                .enumerate()
                .map(|(index, value)| ItemControl {
                    index,
                    placeholder: format!("Bullet point {}", index + 1),
                    value: value.clone(),
                })
                .collect(),
        ),
    }
}
