use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use professores_api::domain::model::{ClassSection, RemovedTeacher, Teacher};
use professores_api::utils::logger::{self, LogFormat};
use reqwest::{Client, StatusCode};
use serde_json::json;

#[derive(Parser)]
#[command(name = "smoke-client")]
#[command(about = "Exercises a freshly started professores-api server")]
struct Args {
    /// Base URL of the running server
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    /// Also delete teacher "3" and check that it is gone
    #[arg(long)]
    include_delete: bool,

    #[arg(short, long)]
    verbose: bool,
}

struct Smoke {
    client: Client,
    base_url: String,
    passed: usize,
}

impl Smoke {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn pass(&mut self, step: &str) {
        self.passed += 1;
        println!("  ✅ {}", step);
    }

    async fn expect_status(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status != expected {
            let body = response.text().await.unwrap_or_default();
            bail!("expected {} but got {}: {}", expected, status, body);
        }
        Ok(response)
    }

    async fn run(&mut self, include_delete: bool) -> Result<()> {
        let response = self.client.get(self.url("/professores")).send().await?;
        let teachers: Vec<Teacher> = self.expect_status(response, StatusCode::OK).await?.json().await?;
        ensure!(!teachers.is_empty(), "teacher list is empty");
        self.pass(&format!("GET /professores ({} teachers)", teachers.len()));

        let response = self
            .client
            .get(self.url("/professores/departamento/historia"))
            .send()
            .await?;
        let found: Vec<Teacher> = self.expect_status(response, StatusCode::OK).await?.json().await?;
        ensure!(
            found.len() == 1 && found[0].name == "Prof. Ana",
            "department search returned {:?}",
            found
        );
        self.pass("GET /professores/departamento/historia");

        let response = self.client.get(self.url("/professores/nao-existe")).send().await?;
        self.expect_status(response, StatusCode::NOT_FOUND).await?;
        self.pass("GET unknown id -> 404");

        let response = self
            .client
            .put(self.url("/professores/2"))
            .json(&json!({ "idade": 0 }))
            .send()
            .await?;
        let updated: Teacher = self.expect_status(response, StatusCode::OK).await?.json().await?;
        ensure!(updated.age == 35, "idade 0 overwrote age: {}", updated.age);
        self.pass("PUT idade 0 is ignored");

        let code = format!("SMOKE-{}", std::process::id());
        let body = json!({ "codigo": code, "disciplina": "SMK101", "alunos": ["Ana"] });
        let response = self
            .client
            .post(self.url("/professores/2/turmas"))
            .json(&body)
            .send()
            .await?;
        let created: ClassSection = self.expect_status(response, StatusCode::CREATED).await?.json().await?;
        ensure!(created.code == code, "created class has code {}", created.code);
        self.pass("POST new class -> 201");

        let response = self
            .client
            .post(self.url("/professores/2/turmas"))
            .json(&body)
            .send()
            .await?;
        self.expect_status(response, StatusCode::CONFLICT).await?;
        self.pass("POST duplicate class -> 409");

        let response = self
            .client
            .post(self.url("/professores/2/turmas"))
            .json(&json!({ "codigo": "X1", "alunos": "Ana" }))
            .send()
            .await?;
        self.expect_status(response, StatusCode::BAD_REQUEST).await?;
        self.pass("POST invalid class -> 400");

        if include_delete {
            let response = self.client.delete(self.url("/professores/3")).send().await?;
            let removed: RemovedTeacher = self.expect_status(response, StatusCode::OK).await?.json().await?;
            ensure!(removed.teacher.id == "3", "removed wrong teacher {}", removed.teacher.id);

            let response = self.client.get(self.url("/professores/3")).send().await?;
            self.expect_status(response, StatusCode::NOT_FOUND).await?;
            self.pass("DELETE /professores/3 is terminal");
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.verbose, LogFormat::Compact);

    println!("🚀 Smoke testing {}", args.base_url);

    let mut smoke = Smoke {
        client: Client::new(),
        base_url: args.base_url.clone(),
        passed: 0,
    };

    smoke
        .run(args.include_delete)
        .await
        .with_context(|| format!("smoke test failed after {} passing steps", smoke.passed))?;

    println!("🎉 {} checks passed", smoke.passed);
    Ok(())
}
