//! The resume document: personal details plus six ordered entry lists.
//!
//! Every list is structurally shared. Editing one entry allocates a new list
//! spine and a new entry, while every other entry keeps its `Arc`. Snapshots
//! taken before an edit therefore stay valid and independently inspectable.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Identifiers
// ────────────────────────────────────────────────────────────────────────────

/// Identifier of a list entry. UUID v4, serialized as its hyphenated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry lists
// ────────────────────────────────────────────────────────────────────────────

/// A list element addressable by identifier and editable one field at a time.
pub trait Entry: Clone {
    /// A single-field edit, e.g. `WorkExperienceUpdate::Company(..)`.
    type Update;

    fn id(&self) -> EntryId;

    /// The zero value: empty strings, `false`, empty lists.
    fn blank(id: EntryId) -> Self;

    fn apply(&mut self, update: Self::Update);
}

/// Ordered, immutable list of entries. Insertion order is display order.
///
/// Mutators return a new list and leave `self` untouched. When the addressed
/// entry does not exist they return a clone of `self`, which is pointer-equal
/// (see [`EntryList::ptr_eq`]).
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList<T>(Arc<Vec<Arc<T>>>);

impl<T> EntryList<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter().map(Arc::as_ref)
    }

    /// True when both lists share the same spine allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Shared handles to the entries, for identity checks.
    #[cfg(test)]
    pub fn shared(&self) -> &[Arc<T>] {
        &self.0
    }
}

impl<T: Entry> EntryList<T> {
    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.iter().find(|e| e.id() == id)
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.0.iter().position(|e| e.id() == id)
    }

    /// Appends `entry` at the end.
    pub fn push(&self, entry: T) -> Self {
        let mut entries = Vec::with_capacity(self.len() + 1);
        entries.extend(self.0.iter().cloned());
        entries.push(Arc::new(entry));
        Self(Arc::new(entries))
    }

    /// Replaces the entry matching `id` with whatever `f` returns.
    /// `None` from `f`, or no matching entry, leaves the list unchanged.
    pub fn replace_with<F>(&self, id: EntryId, f: F) -> Self
    where
        F: FnOnce(&T) -> Option<T>,
    {
        let Some(pos) = self.position(id) else {
            return self.clone();
        };
        let Some(replacement) = f(self.0[pos].as_ref()) else {
            return self.clone();
        };
        let mut entries = self.0.as_ref().clone();
        entries[pos] = Arc::new(replacement);
        Self(Arc::new(entries))
    }

    /// Sets one field on the entry matching `id`.
    pub fn update(&self, id: EntryId, update: T::Update) -> Self {
        self.replace_with(id, |entry| {
            let mut entry = entry.clone();
            entry.apply(update);
            Some(entry)
        })
    }

    pub fn remove(&self, id: EntryId) -> Self {
        if self.position(id).is_none() {
            return self.clone();
        }
        Self(Arc::new(
            self.0.iter().filter(|e| e.id() != id).cloned().collect(),
        ))
    }
}

impl<T> Clone for EntryList<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self(Arc::new(Vec::new()))
    }
}

impl<T: PartialEq> PartialEq for EntryList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl<T> FromIterator<T> for EntryList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().map(Arc::new).collect()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

/// Singleton header block. Empty string means unset; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub portfolio: String,
    pub summary: String,
    pub hobbies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalInfoUpdate {
    FullName(String),
    Email(String),
    Phone(String),
    Location(String),
    Portfolio(String),
    Summary(String),
    Hobbies(String),
}

impl PersonalInfo {
    pub fn apply(&mut self, update: PersonalInfoUpdate) {
        match update {
            PersonalInfoUpdate::FullName(v) => self.full_name = v,
            PersonalInfoUpdate::Email(v) => self.email = v,
            PersonalInfoUpdate::Phone(v) => self.phone = v,
            PersonalInfoUpdate::Location(v) => self.location = v,
            PersonalInfoUpdate::Portfolio(v) => self.portfolio = v,
            PersonalInfoUpdate::Summary(v) => self.summary = v,
            PersonalInfoUpdate::Hobbies(v) => self.hobbies = v,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// List entries
// ────────────────────────────────────────────────────────────────────────────

/// When `current` is set the end date is ignored for display but kept as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkExperienceUpdate {
    Company(String),
    Position(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(String),
}

impl Entry for WorkExperience {
    type Update = WorkExperienceUpdate;

    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }

    fn apply(&mut self, update: WorkExperienceUpdate) {
        match update {
            WorkExperienceUpdate::Company(v) => self.company = v,
            WorkExperienceUpdate::Position(v) => self.position = v,
            WorkExperienceUpdate::StartDate(v) => self.start_date = v,
            WorkExperienceUpdate::EndDate(v) => self.end_date = v,
            WorkExperienceUpdate::Current(v) => self.current = v,
            WorkExperienceUpdate::Description(v) => self.description = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationUpdate {
    Institution(String),
    Degree(String),
    Field(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
}

impl Entry for Education {
    type Update = EducationUpdate;

    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
        }
    }

    fn apply(&mut self, update: EducationUpdate) {
        match update {
            EducationUpdate::Institution(v) => self.institution = v,
            EducationUpdate::Degree(v) => self.degree = v,
            EducationUpdate::Field(v) => self.field = v,
            EducationUpdate::StartDate(v) => self.start_date = v,
            EducationUpdate::EndDate(v) => self.end_date = v,
            EducationUpdate::Current(v) => self.current = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: EntryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillUpdate {
    Name(String),
}

impl Entry for Skill {
    type Update = SkillUpdate;

    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }

    fn apply(&mut self, update: SkillUpdate) {
        match update {
            SkillUpdate::Name(v) => self.name = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: EntryId,
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationUpdate {
    Name(String),
    Issuer(String),
    Date(String),
}

impl Entry for Certification {
    type Update = CertificationUpdate;

    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            issuer: String::new(),
            date: String::new(),
        }
    }

    fn apply(&mut self, update: CertificationUpdate) {
        match update {
            CertificationUpdate::Name(v) => self.name = v,
            CertificationUpdate::Issuer(v) => self.issuer = v,
            CertificationUpdate::Date(v) => self.date = v,
        }
    }
}

/// `link` and `technologies` are optional; empty means not provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub technologies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectUpdate {
    Title(String),
    Description(String),
    Link(String),
    Technologies(String),
}

impl Entry for Project {
    type Update = ProjectUpdate;

    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            link: String::new(),
            technologies: String::new(),
        }
    }

    fn apply(&mut self, update: ProjectUpdate) {
        match update {
            ProjectUpdate::Title(v) => self.title = v,
            ProjectUpdate::Description(v) => self.description = v,
            ProjectUpdate::Link(v) => self.link = v,
            ProjectUpdate::Technologies(v) => self.technologies = v,
        }
    }
}

/// A user-titled bullet list. Items have no identity and are addressed by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSection {
    pub id: EntryId,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomSectionUpdate {
    Title(String),
}

impl Entry for CustomSection {
    type Update = CustomSectionUpdate;

    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            title: String::new(),
            items: Vec::new(),
        }
    }

    fn apply(&mut self, update: CustomSectionUpdate) {
        match update {
            CustomSectionUpdate::Title(v) => self.title = v,
        }
    }
}

impl CustomSection {
    /// Copy with an empty item appended.
    pub fn with_item_added(&self) -> Self {
        let mut section = self.clone();
        section.items.push(String::new());
        section
    }

    /// Copy with item `index` replaced, or `None` if `index` is out of range.
    pub fn with_item(&self, index: usize, value: String) -> Option<Self> {
        if index >= self.items.len() {
            return None;
        }
        let mut section = self.clone();
        section.items[index] = value;
        Some(section)
    }

    /// Copy with item `index` removed, or `None` if `index` is out of range.
    pub fn without_item(&self, index: usize) -> Option<Self> {
        if index >= self.items.len() {
            return None;
        }
        let mut section = self.clone();
        section.items.remove(index);
        Some(section)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

/// The whole document. `Resume::default()` is the blank document a session
/// starts with. Cloning is cheap: every branch is reference-counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub personal_info: Arc<PersonalInfo>,
    pub work_experience: EntryList<WorkExperience>,
    pub education: EntryList<Education>,
    pub skills: EntryList<Skill>,
    pub certifications: EntryList<Certification>,
    pub projects: EntryList<Project>,
    pub custom_sections: EntryList<CustomSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> EntryList<Skill> {
        names
            .iter()
            .map(|n| Skill {
                id: EntryId::new(),
                name: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_push_appends_and_shares_existing_entries() {
        let list = skills(&["Rust", "Go"]);
        let pushed = list.push(Skill::blank(EntryId::new()));

        assert_eq!(pushed.len(), 3);
        assert!(!pushed.ptr_eq(&list));
        assert!(Arc::ptr_eq(&list.shared()[0], &pushed.shared()[0]));
        assert!(Arc::ptr_eq(&list.shared()[1], &pushed.shared()[1]));
        assert_eq!(pushed.iter().last().map(|s| s.name.as_str()), Some(""));
    }

    #[test]
    fn test_update_replaces_only_matching_entry() {
        let list = skills(&["Rust", "Go", "Zig"]);
        let target = list.shared()[1].id;
        let updated = list.update(target, SkillUpdate::Name("Python".to_string()));

        assert_eq!(updated.get(target).map(|s| s.name.as_str()), Some("Python"));
        assert!(Arc::ptr_eq(&list.shared()[0], &updated.shared()[0]));
        assert!(!Arc::ptr_eq(&list.shared()[1], &updated.shared()[1]));
        assert!(Arc::ptr_eq(&list.shared()[2], &updated.shared()[2]));
        // the earlier snapshot is untouched
        assert_eq!(list.get(target).map(|s| s.name.as_str()), Some("Go"));
    }

    #[test]
    fn test_update_missing_id_returns_same_list() {
        let list = skills(&["Rust"]);
        let updated = list.update(EntryId::new(), SkillUpdate::Name("x".to_string()));
        assert!(updated.ptr_eq(&list));
    }

    #[test]
    fn test_remove_missing_id_returns_same_list() {
        let list = skills(&["Rust"]);
        assert!(list.remove(EntryId::new()).ptr_eq(&list));
    }

    #[test]
    fn test_remove_keeps_order_of_remaining_entries() {
        let list = skills(&["a", "b", "c"]);
        let removed = list.remove(list.shared()[1].id);
        let names: Vec<_> = removed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_custom_section_item_index_out_of_range() {
        let section = CustomSection::blank(EntryId::new()).with_item_added();
        assert!(section.with_item(1, "x".to_string()).is_none());
        assert!(section.without_item(3).is_none());
        assert_eq!(
            section.with_item(0, "English".to_string()).map(|s| s.items),
            Some(vec!["English".to_string()])
        );
    }

    #[test]
    fn test_resume_serde_shape() {
        let mut resume = Resume::default();
        resume.skills = skills(&["Rust"]);
        let json = serde_json::to_value(&resume).unwrap();
        assert_eq!(json["personal_info"]["full_name"], "");
        assert_eq!(json["skills"][0]["name"], "Rust");
        assert!(json["skills"][0]["id"].is_string());

        let back: Resume = serde_json::from_value(json).unwrap();
        assert_eq!(back, resume);
    }

    #[test]
    fn test_update_enum_wire_format() {
        let update: WorkExperienceUpdate =
            serde_json::from_str(r#"{"current": true}"#).unwrap();
        assert_eq!(update, WorkExperienceUpdate::Current(true));
        let update: PersonalInfoUpdate =
            serde_json::from_str(r#"{"full_name": "Ada"}"#).unwrap();
        assert_eq!(update, PersonalInfoUpdate::FullName("Ada".to_string()));
    }
}
