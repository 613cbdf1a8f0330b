use crate::analysis::priority;
use crate::models::issue::{Issue, IssueStatus, Severity};
use crate::models::map::MapPoint;
use serde::{Deserialize, Serialize};

/// Neighborhoods offered by the list filter, besides "all".
pub const LIST_NEIGHBORHOODS: [&str; 10] = [
    "Marco",
    "Batista Campos",
    "Guamá",
    "Sacramenta",
    "Nazaré",
    "Cidade Velha",
    "Comércio",
    "Bengui",
    "Pedreira",
    "Umarizal",
];

/// Neighborhoods a new report may be filed under.
pub const REPORT_NEIGHBORHOODS: [&str; 15] = [
    "Marco",
    "Batista Campos",
    "Guamá",
    "Sacramenta",
    "Nazaré",
    "Cidade Velha",
    "Comércio",
    "Bengui",
    "Pedreira",
    "Umarizal",
    "Jurunas",
    "Reduto",
    "Fátima",
    "Cremação",
    "Icoaraci",
];

pub const CATEGORIES: [&str; 10] = [
    "Vias e Pavimentação",
    "Drenagem e Alagamentos",
    "Iluminação Pública",
    "Resíduos Sólidos",
    "Calçadas e Acessibilidade",
    "Abastecimento de Água",
    "Conservação do Patrimônio",
    "Arborização e Meio Ambiente",
    "Sinalização de Trânsito",
    "Outros",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabularies {
    pub list_neighborhoods: Vec<String>,
    pub report_neighborhoods: Vec<String>,
    pub categories: Vec<String>,
}

pub fn vocabularies() -> Vocabularies {
    let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect();
    Vocabularies {
        list_neighborhoods: owned(&LIST_NEIGHBORHOODS),
        report_neighborhoods: owned(&REPORT_NEIGHBORHOODS),
        categories: owned(&CATEGORIES),
    }
}

struct Row {
    id: u64,
    title: &'static str,
    address: &'static str,
    neighborhood: &'static str,
    category: &'static str,
    status: IssueStatus,
    severity: Severity,
    votes: u32,
    days_open: u32,
    estimated_affected: u32,
    position: (f64, f64),
    is_recurrent: bool,
    image: &'static str,
}

const ROWS: [Row; 8] = [
    Row {
        id: 1,
        title: "Cratera de Grande Porte na Av. Almirante Barroso",
        address: "Av. Almirante Barroso, 1250 – Marco",
        neighborhood: "Marco",
        category: "Vias e Pavimentação",
        status: IssueStatus::Open,
        severity: Severity::Critical,
        votes: 247,
        days_open: 14,
        estimated_affected: 1200,
        position: (318.0, 175.0),
        is_recurrent: true,
        image: "https://images.unsplash.com/photo-1717882662489-5f4e749b5f2c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxwb3Rob2xlJTIwcm9hZCUyMGRhbWFnZSUyMHVyYmFuJTIwQnJhemlsfGVufDF8fHx8MTc3MjIyNDYwN3ww&ixlib=rb-4.1.0&q=80&w=400",
    },
    Row {
        id: 2,
        title: "Alagamento Recorrente na Travessa Humaitá",
        address: "Tv. Humaitá, 320 – Batista Campos",
        neighborhood: "Batista Campos",
        category: "Drenagem e Alagamentos",
        status: IssueStatus::InAnalysis,
        severity: Severity::Critical,
        votes: 198,
        days_open: 22,
        estimated_affected: 850,
        position: (360.0, 210.0),
        is_recurrent: true,
        image: "https://images.unsplash.com/photo-1700680010066-f02c3e31d9e5?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmbG9vZGluZyUyMHN0cmVldCUyMHVyYmFuJTIwQnJhemlsJTIwY2l0eXxlbnwxfHx8fDE3NzIyMjQ2MTB8MA&ixlib=rb-4.1.0&q=80&w=400",
    },
    Row {
        id: 3,
        title: "Poste de Iluminação Danificado",
        address: "Rua dos Mundurucus, 890 – Guamá",
        neighborhood: "Guamá",
        category: "Iluminação Pública",
        status: IssueStatus::Forwarded,
        severity: Severity::High,
        votes: 134,
        days_open: 8,
        estimated_affected: 420,
        position: (180.0, 280.0),
        is_recurrent: false,
        image: "https://images.unsplash.com/photo-1770447323553-5cd1b6711134?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxicm9rZW4lMjBzdHJlZXRsaWdodCUyMHVyYmFuJTIwaW5mcmFzdHJ1Y3R1cmV8ZW58MXx8fHwxNzcyMTU4NjA1fDA&ixlib=rb-4.1.0&q=80&w=400",
    },
    Row {
        id: 4,
        title: "Descarte Irregular de Lixo em Área Pública",
        address: "Passagem Maracangalha, 45 – Sacramenta",
        neighborhood: "Sacramenta",
        category: "Resíduos Sólidos",
        status: IssueStatus::Open,
        severity: Severity::High,
        votes: 156,
        days_open: 5,
        estimated_affected: 310,
        position: (475.0, 205.0),
        is_recurrent: true,
        image: "https://images.unsplash.com/photo-1762805544550-f12a8ebceb2e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxpbGxlZ2FsJTIwZHVtcGluZyUyMGdhcmJhZ2UlMjB1cmJhbiUyMHN0cmVldHxlbnwxfHx8fDE3NzIyMjQ2MTF8MA&ixlib=rb-4.1.0&q=80&w=400",
    },
    Row {
        id: 5,
        title: "Calçada Danificada com Risco de Queda",
        address: "Av. Nazaré, 432 – Nazaré",
        neighborhood: "Nazaré",
        category: "Calçadas e Acessibilidade",
        status: IssueStatus::Open,
        severity: Severity::Medium,
        votes: 89,
        days_open: 3,
        estimated_affected: 180,
        position: (290.0, 240.0),
        is_recurrent: false,
        image: "https://images.unsplash.com/photo-1549041490-e1eb6d44aad9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxicm9rZW4lMjBzaWRld2FsayUyMHBhdmVtZW50JTIwY2l0eXxlbnwxfHx8fDE3NzIyMjQ2MTJ8MA&ixlib=rb-4.1.0&q=80&w=400",
    },
    Row {
        id: 6,
        title: "Pichação em Patrimônio Histórico",
        address: "Rua Siqueira Mendes, 210 – Cidade Velha",
        neighborhood: "Cidade Velha",
        category: "Conservação do Patrimônio",
        status: IssueStatus::Resolved,
        severity: Severity::Low,
        votes: 64,
        days_open: 0,
        estimated_affected: 95,
        position: (255.0, 385.0),
        is_recurrent: false,
        image: "https://images.unsplash.com/photo-1767425036415-df1ad5f1fbb9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxncmFmZml0aSUyMHZhbmRhbGlzbSUyMHVyYmFuJTIwYnVpbGRpbmclMjB3YWxsfGVufDF8fHx8MTc3MjIyNDYxNHww&ixlib=rb-4.1.0&q=80&w=400",
    },
    Row {
        id: 7,
        title: "Vazamento de Água na Rede Pública",
        address: "Tv. 14 de Março, 78 – Comércio",
        neighborhood: "Comércio",
        category: "Abastecimento de Água",
        status: IssueStatus::InAnalysis,
        severity: Severity::High,
        votes: 178,
        days_open: 11,
        estimated_affected: 540,
        position: (262.0, 355.0),
        is_recurrent: false,
        image: "https://images.unsplash.com/photo-1709138204640-fd39ae10b7e4?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHx3YXRlciUyMHBpcGUlMjBidXJzdCUyMGxlYWslMjByb2FkfGVufDF8fHx8MTc3MjIyNDYxNHww&ixlib=rb-4.1.0&q=80&w=400",
    },
    Row {
        id: 8,
        title: "Buraco Profundo na Pista do BRT",
        address: "Av. Augusto Montenegro, 2400 – Bengui",
        neighborhood: "Bengui",
        category: "Vias e Pavimentação",
        status: IssueStatus::Forwarded,
        severity: Severity::Critical,
        votes: 312,
        days_open: 19,
        estimated_affected: 2100,
        position: (125.0, 120.0),
        is_recurrent: true,
        image: "https://images.unsplash.com/photo-1717882662489-5f4e749b5f2c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxwb3Rob2xlJTIwcm9hZCUyMGRhbWFnZSUyMHVyYmFuJTIwQnJhemlsfGVufDF8fHx8MTc3MjIyNDYwN3ww&ixlib=rb-4.1.0&q=80&w=400",
    },
];

/// The sample catalog. Scores are derived, resolved issues carry no
/// resolution timestamp.
pub fn sample_issues() -> Vec<Issue> {
    ROWS.iter()
        .map(|row| Issue {
            id: row.id,
            title: row.title.to_string(),
            address: row.address.to_string(),
            neighborhood: row.neighborhood.to_string(),
            category: row.category.to_string(),
            description: String::new(),
            status: row.status,
            severity: row.severity,
            votes: row.votes,
            days_open: row.days_open,
            priority_score: priority::score(row.votes, row.days_open, row.severity),
            estimated_affected: row.estimated_affected,
            position: MapPoint::new(row.position.0, row.position.1),
            is_recurrent: row.is_recurrent,
            evidence: Vec::new(),
            anonymous: false,
            image: Some(row.image.to_string()),
            resolved_at: None,
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_draft() -> crate::models::issue::IssueDraft {
    crate::models::issue::IssueDraft {
        title: "Semáforo apagado".to_string(),
        address: "Av. Pedro Miranda, 100".to_string(),
        neighborhood: "Pedreira".to_string(),
        category: "Sinalização de Trânsito".to_string(),
        description: "Semáforo sem energia desde ontem".to_string(),
        severity: Severity::High,
        estimated_affected: 0,
        position: MapPoint::CENTER,
        is_recurrent: false,
        evidence: vec![],
        anonymous: false,
    }
}
