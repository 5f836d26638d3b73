use crate::core::normalize::fold_accents;
use crate::core::patch::{is_truthy, strict_eq, PatchSemantics};
use crate::domain::model::{ClassDraft, ClassSection, Teacher, TeacherPatch};
use crate::domain::ports::TeacherStore;
use crate::utils::error::{DirectoryError, Result};
use serde_json::Value;

pub const CLASS_BODY_HINT: &str = "Corpo inválido. Esperado { codigo, disciplina, alunos[] }";

/// 教師目錄服務：所有讀寫操作都經由此處，每個操作要嘛完整成功、要嘛不做任何修改
pub struct TeacherDirectory<S: TeacherStore> {
    store: S,
    patch_semantics: PatchSemantics,
}

impl<S: TeacherStore> TeacherDirectory<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            patch_semantics: PatchSemantics::default(),
        }
    }

    pub fn with_patch_semantics(mut self, patch_semantics: PatchSemantics) -> Self {
        self.patch_semantics = patch_semantics;
        self
    }

    pub fn list_teachers(&self) -> &[Teacher] {
        self.store.all()
    }

    pub fn get_teacher(&self, id: &str) -> Result<&Teacher> {
        self.store
            .get(id)
            .ok_or_else(|| DirectoryError::not_found(id))
    }

    pub fn list_classes(&self, id: &str) -> Result<&[ClassSection]> {
        self.get_teacher(id).map(|t| t.classes.as_slice())
    }

    pub fn update_teacher(&mut self, id: &str, patch: &TeacherPatch) -> Result<&Teacher> {
        let semantics = self.patch_semantics;
        let teacher = self
            .store
            .get_mut(id)
            .ok_or_else(|| DirectoryError::not_found(id))?;

        let updates = semantics.resolve(patch);
        if updates.is_empty() {
            tracing::debug!("No applicable fields for teacher {}", id);
        } else {
            tracing::debug!("Updating teacher {}: {:?}", id, updates);
        }
        updates.apply_to(teacher);

        Ok(&*teacher)
    }

    pub fn add_class(&mut self, id: &str, draft: ClassDraft) -> Result<ClassSection> {
        let teacher = self
            .store
            .get_mut(id)
            .ok_or_else(|| DirectoryError::not_found(id))?;

        let section = validate_draft(draft)?;
        if teacher
            .classes
            .iter()
            .any(|c| strict_eq(&c.code, &section.code))
        {
            return Err(DirectoryError::Conflict { code: section.code });
        }

        tracing::debug!(
            "Adding class {} ({}) to teacher {}",
            section.code,
            section.subject,
            id
        );
        teacher.classes.push(section.clone());
        Ok(section)
    }

    /// Storage order is preserved; no match yields an empty list. A department
    /// stored as a non-string value never matches.
    pub fn find_by_department(&self, department: &str) -> Vec<&Teacher> {
        let wanted = fold_accents(department);
        self.store
            .all()
            .iter()
            .filter(|t| {
                t.department
                    .as_str()
                    .is_some_and(|d| fold_accents(d) == wanted)
            })
            .collect()
    }

    pub fn delete_teacher(&mut self, id: &str) -> Result<Teacher> {
        self.store
            .remove(id)
            .ok_or_else(|| DirectoryError::not_found(id))
    }
}

/// `codigo` and `disciplina` must be truthy and `alunos` an array; values are kept as sent.
fn validate_draft(draft: ClassDraft) -> Result<ClassSection> {
    let invalid = || DirectoryError::invalid_input(CLASS_BODY_HINT);

    let code = draft.code.filter(is_truthy).ok_or_else(invalid)?;
    let subject = draft.subject.filter(is_truthy).ok_or_else(invalid)?;
    let students = match draft.students {
        Some(Value::Array(items)) => items,
        _ => return Err(invalid()),
    };

    Ok(ClassSection {
        code,
        subject,
        students,
    })
}
