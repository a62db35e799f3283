//! Pure layout of the printable resume.
//!
//! `layout` decides WHAT appears and in which order; the HTML template only
//! decides how it looks. Visibility rules:
//! - a section appears only when its backing list (or field) is non-empty;
//! - skill chips and custom-section bullets are then filtered for blankness,
//!   so a section can appear with no chips or bullets under its header;
//! - hobbies is a single field: any non-empty text shows the section as typed;
//! - a `current` entry always ends its date range with "Present".

use serde::Serialize;

use crate::models::resume::{Certification, Education, Project, Resume, WorkExperience};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const PRESENT: &str = "Present";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewDocument {
    pub header: Header,
    pub sections: Vec<PreviewSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub contacts: Vec<Contact>,
    pub portfolio: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSection {
    pub title: String,
    pub body: SectionBody,
}

/// Serialized with a `kind` tag so the template can branch on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Entries(Vec<PreviewEntry>),
    Chips(Vec<String>),
    Bullets(Vec<String>),
    Paragraph(String),
}

/// One dated block: a job, a degree, a certification or a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreviewEntry {
    pub heading: String,
    pub subheading: Option<String>,
    pub detail: Option<String>,
    pub dates: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
}

#[cfg(test)]
impl PreviewDocument {
    pub fn section(&self, title: &str) -> Option<&PreviewSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn non_blank(s: &str) -> Option<String> {
    (!is_blank(s)).then(|| s.to_string())
}

/// `"{start} - {end}"`, with `end` replaced by "Present" when `current`.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current { PRESENT } else { end };
    format!("{start} - {end}")
}

pub fn layout(resume: &Resume) -> PreviewDocument {
    let mut sections = Vec::new();

    if !resume.work_experience.is_empty() {
        sections.push(PreviewSection {
            title: "Work Experience".to_string(),
            body: SectionBody::Entries(resume.work_experience.iter().map(work_entry).collect()),
        });
    }

    if !resume.education.is_empty() {
        sections.push(PreviewSection {
            title: "Education".to_string(),
            body: SectionBody::Entries(resume.education.iter().map(education_entry).collect()),
        });
    }

    if !resume.skills.is_empty() {
        sections.push(PreviewSection {
            title: "Skills".to_string(),
            body: SectionBody::Chips(
                resume
                    .skills
                    .iter()
                    .filter_map(|s| non_blank(&s.name))
                    .collect(),
            ),
        });
    }

    if !resume.certifications.is_empty() {
        sections.push(PreviewSection {
            title: "Certifications".to_string(),
            body: SectionBody::Entries(
                resume
                    .certifications
                    .iter()
                    .map(certification_entry)
                    .collect(),
            ),
        });
    }

    if !resume.projects.is_empty() {
        sections.push(PreviewSection {
            title: "Projects".to_string(),
            body: SectionBody::Entries(resume.projects.iter().map(project_entry).collect()),
        });
    }

    for custom in resume.custom_sections.iter() {
        if custom.items.is_empty() {
            continue;
        }
        sections.push(PreviewSection {
            title: custom.title.clone(),
            body: SectionBody::Bullets(custom.items.iter().filter_map(|i| non_blank(i)).collect()),
        });
    }

    if !resume.personal_info.hobbies.is_empty() {
        sections.push(PreviewSection {
            title: "Hobbies & Interests".to_string(),
            body: SectionBody::Paragraph(resume.personal_info.hobbies.clone()),
        });
    }

    PreviewDocument {
        header: header(resume),
        sections,
    }
}

fn header(resume: &Resume) -> Header {
    let info = &resume.personal_info;
    let contacts = [
        (ContactKind::Email, &info.email),
        (ContactKind::Phone, &info.phone),
        (ContactKind::Location, &info.location),
    ]
    .into_iter()
    .filter_map(|(kind, text)| non_blank(text).map(|text| Contact { kind, text }))
    .collect();

    Header {
        name: non_blank(&info.full_name).unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
        contacts,
        portfolio: non_blank(&info.portfolio),
        summary: non_blank(&info.summary),
    }
}

fn work_entry(exp: &WorkExperience) -> PreviewEntry {
    PreviewEntry {
        heading: exp.position.clone(),
        subheading: Some(exp.company.clone()),
        dates: Some(date_range(&exp.start_date, &exp.end_date, exp.current)),
        description: non_blank(&exp.description),
        ..PreviewEntry::default()
    }
}

fn education_entry(edu: &Education) -> PreviewEntry {
    PreviewEntry {
        heading: edu.degree.clone(),
        subheading: Some(edu.institution.clone()),
        detail: non_blank(&edu.field),
        dates: Some(date_range(&edu.start_date, &edu.end_date, edu.current)),
        ..PreviewEntry::default()
    }
}

fn certification_entry(cert: &Certification) -> PreviewEntry {
    PreviewEntry {
        heading: cert.name.clone(),
        subheading: non_blank(&cert.issuer),
        dates: non_blank(&cert.date),
        ..PreviewEntry::default()
    }
}

fn project_entry(project: &Project) -> PreviewEntry {
    PreviewEntry {
        heading: project.title.clone(),
        link: non_blank(&project.link),
        description: non_blank(&project.description),
        technologies: non_blank(&project.technologies),
        ..PreviewEntry::default()
    }
}
