use crate::domain::model::{ClassSection, Teacher};
use serde_json::Value;

fn section(code: &str, subject: &str, students: &[&str]) -> ClassSection {
    ClassSection {
        code: Value::from(code),
        subject: Value::from(subject),
        students: students.iter().map(|s| Value::from(*s)).collect(),
    }
}

fn teacher(id: &str, name: &str, age: u32, department: &str, classes: Vec<ClassSection>) -> Teacher {
    Teacher {
        id: id.to_string(),
        name: Value::from(name),
        age: Value::from(age),
        department: Value::from(department),
        classes,
    }
}

/// 啟動時載入的固定資料
pub fn seed_teachers() -> Vec<Teacher> {
    vec![
        teacher(
            "1",
            "Prof. Carlos",
            40,
            "Matemática",
            vec![
                section("9A", "MAT101", &["João", "Maria", "Pedro"]),
                section("10A", "MAT201", &["Ana", "Luiz"]),
            ],
        ),
        teacher(
            "2",
            "Prof. Ana",
            35,
            "História",
            vec![
                section("9A", "HIS101", &["João", "Pedro"]),
                section("10B", "HIS201", &["Maria", "Carlos", "Luiza"]),
            ],
        ),
        teacher(
            "3",
            "Prof. João",
            50,
            "Ciências",
            vec![
                section("9A", "CIE101", &["João", "Maria"]),
                section("9B", "CIE101", &["Pedro", "Luiz"]),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_and_codes_are_unique() {
        let teachers = seed_teachers();
        assert_eq!(teachers.len(), 3);

        let ids: HashSet<&str> = teachers.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), teachers.len());

        for t in &teachers {
            let codes: HashSet<&str> = t.classes.iter().filter_map(|c| c.code.as_str()).collect();
            assert_eq!(codes.len(), t.classes.len(), "duplicate code under {}", t.id);
        }
    }
}
