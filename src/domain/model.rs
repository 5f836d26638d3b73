use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 教師紀錄，欄位名稱沿用對外 API 的葡萄牙文 key
///
/// Profile fields hold whatever JSON the last update stored; only truthiness is
/// checked on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: Value,
    #[serde(rename = "idade")]
    pub age: Value,
    #[serde(rename = "departamento")]
    pub department: Value,
    #[serde(rename = "turmas", default)]
    pub classes: Vec<ClassSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSection {
    #[serde(rename = "codigo")]
    pub code: Value,
    #[serde(rename = "disciplina")]
    pub subject: Value,
    #[serde(rename = "alunos", default)]
    pub students: Vec<Value>,
}

/// PUT body. Values are kept as raw JSON so truthiness can be judged before storing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherPatch {
    #[serde(rename = "nome", default)]
    pub name: Option<Value>,
    #[serde(rename = "idade", default)]
    pub age: Option<Value>,
    #[serde(rename = "departamento", default)]
    pub department: Option<Value>,
}

/// POST body for a new class section, validated by the directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassDraft {
    #[serde(rename = "codigo", default)]
    pub code: Option<Value>,
    #[serde(rename = "disciplina", default)]
    pub subject: Option<Value>,
    #[serde(rename = "alunos", default)]
    pub students: Option<Value>,
}

/// DELETE 回應的外層結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovedTeacher {
    pub message: String,
    #[serde(rename = "professor")]
    pub teacher: Teacher,
}
