use crate::domain::model::Teacher;
use crate::domain::ports::TeacherStore;
use crate::domain::seed::seed_teachers;

/// Ordered in-process collection, scanned linearly.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    teachers: Vec<Teacher>,
}

impl InMemoryStore {
    /// 以預設的三筆教師資料建立
    pub fn seeded() -> Self {
        Self {
            teachers: seed_teachers(),
        }
    }
}

impl TeacherStore for InMemoryStore {
    fn all(&self) -> &[Teacher] {
        &self.teachers
    }

    fn get(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Teacher> {
        self.teachers.iter_mut().find(|t| t.id == id)
    }

    fn remove(&mut self, id: &str) -> Option<Teacher> {
        let idx = self.teachers.iter().position(|t| t.id == id)?;
        Some(self.teachers.remove(idx))
    }
}
