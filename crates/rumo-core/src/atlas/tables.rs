//! Map tables: federative units, border adjacency and border travel costs
//!
//! Travel costs are approximate road distances in kilometres between the
//! two capitals of a border pair, rounded to the values used throughout the
//! tests. Each pair appears once; `Atlas::border_cost` looks it up in
//! either order.

use super::{StateRow, Zone};

#[rustfmt::skip]
pub const STATES: &[StateRow] = &[
    StateRow { capital: "Rio Branco", state: "Acre", code: "AC", zone: Zone::Norte, desirability: 5 },
    StateRow { capital: "Maceió", state: "Alagoas", code: "AL", zone: Zone::Nordeste, desirability: 8 },
    StateRow { capital: "Macapá", state: "Amapá", code: "AP", zone: Zone::Norte, desirability: 5 },
    StateRow { capital: "Manaus", state: "Amazonas", code: "AM", zone: Zone::Norte, desirability: 8 },
    StateRow { capital: "Salvador", state: "Bahia", code: "BA", zone: Zone::Nordeste, desirability: 9 },
    StateRow { capital: "Fortaleza", state: "Ceará", code: "CE", zone: Zone::Nordeste, desirability: 8 },
    StateRow { capital: "Brasília", state: "Distrito Federal", code: "DF", zone: Zone::CentroOeste, desirability: 7 },
    StateRow { capital: "Vitória", state: "Espírito Santo", code: "ES", zone: Zone::Sudeste, desirability: 7 },
    StateRow { capital: "Goiânia", state: "Goiás", code: "GO", zone: Zone::CentroOeste, desirability: 6 },
    StateRow { capital: "São Luís", state: "Maranhão", code: "MA", zone: Zone::Nordeste, desirability: 7 },
    StateRow { capital: "Cuiabá", state: "Mato Grosso", code: "MT", zone: Zone::CentroOeste, desirability: 6 },
    StateRow { capital: "Campo Grande", state: "Mato Grosso do Sul", code: "MS", zone: Zone::CentroOeste, desirability: 7 },
    StateRow { capital: "Belo Horizonte", state: "Minas Gerais", code: "MG", zone: Zone::Sudeste, desirability: 8 },
    StateRow { capital: "Belém", state: "Pará", code: "PA", zone: Zone::Norte, desirability: 7 },
    StateRow { capital: "João Pessoa", state: "Paraíba", code: "PB", zone: Zone::Nordeste, desirability: 7 },
    StateRow { capital: "Curitiba", state: "Paraná", code: "PR", zone: Zone::Sul, desirability: 8 },
    StateRow { capital: "Recife", state: "Pernambuco", code: "PE", zone: Zone::Nordeste, desirability: 8 },
    StateRow { capital: "Teresina", state: "Piauí", code: "PI", zone: Zone::Nordeste, desirability: 5 },
    StateRow { capital: "Rio de Janeiro", state: "Rio de Janeiro", code: "RJ", zone: Zone::Sudeste, desirability: 10 },
    StateRow { capital: "Natal", state: "Rio Grande do Norte", code: "RN", zone: Zone::Nordeste, desirability: 8 },
    StateRow { capital: "Porto Alegre", state: "Rio Grande do Sul", code: "RS", zone: Zone::Sul, desirability: 8 },
    StateRow { capital: "Porto Velho", state: "Rondônia", code: "RO", zone: Zone::Norte, desirability: 4 },
    StateRow { capital: "Boa Vista", state: "Roraima", code: "RR", zone: Zone::Norte, desirability: 5 },
    StateRow { capital: "Florianópolis", state: "Santa Catarina", code: "SC", zone: Zone::Sul, desirability: 9 },
    StateRow { capital: "São Paulo", state: "São Paulo", code: "SP", zone: Zone::Sudeste, desirability: 7 },
    StateRow { capital: "Aracaju", state: "Sergipe", code: "SE", zone: Zone::Nordeste, desirability: 6 },
    StateRow { capital: "Palmas", state: "Tocantins", code: "TO", zone: Zone::Norte, desirability: 5 },
];

pub const BORDERS: &[(&str, &[&str])] = &[
    ("AC", &["AM", "RO"]),
    ("AL", &["PE", "SE", "BA"]),
    ("AP", &["PA"]),
    ("AM", &["RR", "PA", "MT", "RO", "AC"]),
    ("BA", &["SE", "AL", "PE", "PI", "TO", "GO", "MG", "ES"]),
    ("CE", &["PI", "RN", "PB", "PE"]),
    ("DF", &["GO", "MG"]),
    ("ES", &["BA", "MG", "RJ"]),
    ("GO", &["MT", "MS", "MG", "BA", "TO", "DF"]),
    ("MA", &["PA", "TO", "PI"]),
    ("MT", &["RO", "AM", "PA", "TO", "GO", "MS"]),
    ("MS", &["MT", "GO", "MG", "SP", "PR"]),
    ("MG", &["BA", "GO", "MS", "SP", "RJ", "ES", "DF"]),
    ("PA", &["AP", "RR", "AM", "MT", "TO", "MA"]),
    ("PB", &["RN", "CE", "PE"]),
    ("PR", &["SP", "MS", "SC"]),
    ("PE", &["PB", "CE", "PI", "BA", "AL"]),
    ("PI", &["MA", "TO", "BA", "PE", "CE"]),
    ("RJ", &["ES", "MG", "SP"]),
    ("RN", &["CE", "PB"]),
    ("RS", &["SC"]),
    ("RO", &["AC", "AM", "MT"]),
    ("RR", &["AM", "PA"]),
    ("SC", &["PR", "RS"]),
    ("SP", &["MG", "RJ", "PR", "MS"]),
    ("SE", &["AL", "BA"]),
    ("TO", &["MA", "PI", "BA", "GO", "MT", "PA"]),
];

pub const LINKS: &[(&str, &str, u32)] = &[
    ("AC", "AM", 1445),
    ("AC", "RO", 510),
    ("AL", "PE", 260),
    ("AL", "SE", 295),
    ("AL", "BA", 630),
    ("AP", "PA", 530),
    ("AM", "RR", 785),
    ("AM", "PA", 1670),
    ("AM", "MT", 2015),
    ("AM", "RO", 900),
    ("BA", "SE", 325),
    ("BA", "PE", 800),
    ("BA", "PI", 1160),
    ("BA", "TO", 1450),
    ("BA", "GO", 1640),
    ("BA", "MG", 1370),
    ("BA", "ES", 1200),
    ("CE", "PI", 600),
    ("CE", "RN", 520),
    ("CE", "PB", 690),
    ("CE", "PE", 800),
    ("DF", "GO", 210),
    ("DF", "MG", 740),
    ("ES", "MG", 520),
    ("ES", "RJ", 520),
    ("GO", "MT", 890),
    ("GO", "MS", 840),
    ("GO", "MG", 900),
    ("GO", "TO", 870),
    ("MA", "PA", 800),
    ("MA", "TO", 1390),
    ("MA", "PI", 450),
    ("MT", "RO", 1450),
    ("MT", "PA", 2000),
    ("MT", "TO", 1500),
    ("MT", "MS", 700),
    ("MS", "MG", 1190),
    ("MS", "SP", 1015),
    ("MS", "PR", 1000),
    ("MG", "SP", 585),
    ("MG", "RJ", 440),
    ("PA", "RR", 1720),
    ("PA", "TO", 970),
    ("PB", "RN", 180),
    ("PB", "PE", 120),
    ("PR", "SP", 410),
    ("PR", "SC", 300),
    ("PE", "PI", 1140),
    ("PI", "TO", 1000),
    ("RJ", "SP", 430),
    ("RS", "SC", 460),
];
