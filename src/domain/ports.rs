use crate::domain::model::Teacher;

/// Storage contract for the teacher collection. Order of `all()` is storage order.
pub trait TeacherStore: Send {
    fn all(&self) -> &[Teacher];
    fn get(&self, id: &str) -> Option<&Teacher>;
    fn get_mut(&mut self, id: &str) -> Option<&mut Teacher>;
    fn remove(&mut self, id: &str) -> Option<Teacher>;
}
