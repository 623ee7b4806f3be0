//! Portuguese word lists for the rule-based pipeline.
//!
//! Closed-class words by part of speech, frequent irregular verbs and short
//! adjectives, abbreviations that keep their period, noun stoplists for the
//! morphological verb and adjective rules, and the gazetteers used by entity
//! recognition. All entries are lowercase.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::pos::Upos;

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// Abbreviations written with a trailing period (period not included).
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        // titles
        "sr", "sra", "srta", "dr", "dra", "prof", "profa", "eng", "enga", "gov", "dep", "sen",
        "min", "pres", "des", "gen", "sgt", "ten", "maj", "arq", "adv", "pe",
        // addresses and references
        "av", "rod", "al", "pç", "apto", "cep", "tel", "cel", "fax", "art", "arts", "inc", "pág",
        "pag", "págs", "pp", "vol", "núm", "nº", "cap", "fl", "fls", "ed", "obs", "ref", "ibid",
        "op", "cit", "etc", "ex", "aprox", "máx", "mín", "séc", "cia", "ltda",
        // months
        "jan", "fev", "abr", "jun", "jul", "ago", "nov",
        // units
        "km", "cm", "mm", "kg", "mg", "ml", "hab",
    ])
});

/// Titles that announce a person name.
pub static TITLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "sr", "sr.", "sra", "sra.", "srta", "srta.", "dr", "dr.", "dra", "dra.", "prof",
        "prof.", "profa", "profa.", "eng.", "gov.", "dep.", "sen.", "pe.", "senhor", "senhora",
        "doutor", "doutora", "professor", "professora", "presidente", "ministro", "ministra",
        "deputado", "deputada", "senador", "senadora", "governador", "governadora", "prefeito",
        "prefeita", "padre", "dom", "dona", "papa", "rei", "rainha", "juiz", "juíza",
    ])
});

static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "o", "a", "os", "as", "um", "uma", "uns", "umas", "este", "esta", "estes", "estas",
        "esse", "essa", "esses", "essas", "aquele", "aquela", "aqueles", "aquelas", "meu",
        "minha", "meus", "minhas", "teu", "tua", "teus", "tuas", "seu", "sua", "seus", "suas",
        "nosso", "nossa", "nossos", "nossas", "vosso", "vossa", "cada", "todo", "toda", "todos",
        "todas", "algum", "alguma", "alguns", "algumas", "nenhum", "nenhuma", "qualquer",
        "quaisquer", "outro", "outra", "outros", "outras", "muitos", "muitas", "vários",
        "várias", "poucos", "poucas", "tal", "tais", "mesmo", "mesma", "mesmos", "mesmas",
        "ambos", "ambas", "certos", "certas", "tanta", "tantos", "tantas", "quantos", "quantas",
    ])
});

static ADPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "de", "em", "para", "pra", "por", "com", "sem", "sob", "sobre", "entre", "até", "desde",
        "contra", "após", "perante", "ante", "durante", "mediante", "trás", "via",
        // contractions
        "do", "da", "dos", "das", "no", "na", "nos", "nas", "ao", "aos", "à", "às", "pelo",
        "pela", "pelos", "pelas", "num", "numa", "nuns", "numas", "dum", "duma", "deste",
        "desta", "destes", "destas", "neste", "nesta", "nestes", "nestas", "desse", "dessa",
        "desses", "dessas", "nesse", "nessa", "nesses", "nessas", "daquele", "daquela",
        "daqueles", "daquelas", "naquele", "naquela", "naqueles", "naquelas", "àquele",
        "àquela", "dele", "dela", "deles", "delas", "nele", "nela", "neles", "nelas", "disso",
        "nisso", "disto", "nisto", "daquilo", "naquilo", "pro", "pros", "pras",
    ])
});

static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "eu", "tu", "ele", "ela", "nós", "vós", "eles", "elas", "você", "vocês", "me", "te",
        "se", "lhe", "lhes", "vos", "mim", "ti", "si", "comigo", "contigo", "consigo",
        "conosco", "convosco", "isto", "isso", "aquilo", "quem", "qual", "quais", "algo",
        "alguém", "ninguém", "nada", "tudo", "outrem", "cujo", "cuja", "cujos", "cujas",
    ])
});

static COORDINATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&["e", "ou", "mas", "nem", "porém", "contudo", "todavia", "entretanto"])
});

static SUBORDINATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "que", "porque", "quando", "embora", "caso", "conforme", "enquanto", "como", "pois",
        "contanto", "conquanto", "porquanto", "se", "senão",
    ])
});

static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        // ser
        "ser", "sou", "és", "é", "somos", "são", "era", "eras", "éramos", "eram", "fui", "foi",
        "fomos", "foram", "será", "seremos", "serão", "seria", "seríamos", "seriam", "seja",
        "sejamos", "sejam", "fosse", "fossem", "sido", "sendo", "for", "forem",
        // estar
        "estar", "estou", "está", "estamos", "estão", "estava", "estávamos", "estavam",
        "estive", "esteve", "estivemos", "estiveram", "estará", "estarão", "estaria",
        "estariam", "esteja", "estejam", "estivesse", "estivessem", "estando",
        // ter
        "ter", "tenho", "tem", "temos", "têm", "tinha", "tínhamos", "tinham", "tive", "teve",
        "tivemos", "tiveram", "terá", "terão", "teria", "teriam", "tenha", "tenham",
        "tivesse", "tivessem", "tido", "tendo",
        // haver
        "haver", "há", "havia", "houve", "haverá", "haveria", "haja", "houvesse", "havido",
        "havendo", "hei", "hão",
        // modals and periphrastic ir
        "pode", "podem", "podia", "podiam", "poderia", "poderiam", "posso", "podemos",
        "pôde", "puderam", "possa", "possam", "deve", "devem", "devia", "deviam", "deveria",
        "deveriam", "devemos", "vai", "vão", "vou", "vamos", "ia", "iam",
    ])
});

static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "não", "sim", "muito", "mais", "menos", "bem", "mal", "já", "ainda", "também",
        "sempre", "nunca", "jamais", "aqui", "ali", "lá", "cá", "aí", "hoje", "ontem",
        "amanhã", "agora", "depois", "antes", "logo", "então", "talvez", "apenas", "só",
        "quase", "tão", "tanto", "assim", "onde", "aonde", "quanto", "pouco", "bastante",
        "demais", "cedo", "tarde", "longe", "perto", "dentro", "fora", "acima", "abaixo",
        "atrás", "adiante", "portanto", "inclusive", "sobretudo", "aliás", "enfim", "afinal",
        "ora", "outrora", "breve", "juntos", "junto", "somente", "porquê",
    ])
});

static INTERJECTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&["olá", "oi", "ah", "oh", "ei", "ops", "uau", "tchau", "opa", "ufa", "psiu"])
});

static NUMERALS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "zero", "dois", "duas", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
        "dez", "onze", "doze", "treze", "catorze", "quatorze", "quinze", "dezesseis",
        "dezessete", "dezoito", "dezenove", "vinte", "trinta", "quarenta", "cinquenta",
        "sessenta", "setenta", "oitenta", "noventa", "cem", "cento", "duzentos", "trezentos",
        "quinhentos", "mil", "milhão", "milhões", "bilhão", "bilhões",
    ])
});

/// Closed-class part of speech for a lowercase word, if it has one.
pub fn closed_class(word: &str) -> Option<Upos> {
    if DETERMINERS.contains(word) {
        Some(Upos::Det)
    } else if ADPOSITIONS.contains(word) {
        Some(Upos::Adp)
    } else if COORDINATORS.contains(word) {
        Some(Upos::Cconj)
    } else if SUBORDINATORS.contains(word) {
        Some(Upos::Sconj)
    } else if PRONOUNS.contains(word) {
        Some(Upos::Pron)
    } else if AUXILIARIES.contains(word) {
        Some(Upos::Aux)
    } else if ADVERBS.contains(word) {
        Some(Upos::Adv)
    } else if NUMERALS.contains(word) {
        Some(Upos::Num)
    } else if INTERJECTIONS.contains(word) {
        Some(Upos::Intj)
    } else {
        None
    }
}

/// Frequent irregular verb forms the suffix rules cannot reach.
pub static IRREGULAR_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    // ver
    set.extend([
        "ver", "vejo", "vê", "vemos", "veem", "vi", "viu", "vimos", "viram", "viam", "verá",
        "veja", "vejam", "visto",
    ]);
    // fazer
    set.extend([
        "fazer", "faço", "faz", "fazemos", "fazem", "fiz", "fez", "fizemos", "fizeram", "fazia",
        "faziam", "fará", "farão", "faria", "faça", "façam",
    ]);
    // dar
    set.extend([
        "dar", "dou", "dá", "damos", "dão", "dei", "deu", "demos", "deram", "dava", "davam",
        "dará", "daria", "dê", "deem",
    ]);
    // vir
    set.extend([
        "vir", "venho", "vem", "vêm", "vim", "veio", "vieram", "vinha", "vinham", "virá",
        "venha", "venham",
    ]);
    // dizer
    set.extend([
        "dizer", "digo", "diz", "dizemos", "dizem", "disse", "dissemos", "disseram", "dizia",
        "diziam", "dirá", "diria", "diga", "digam", "dito",
    ]);
    // querer
    set.extend([
        "querer", "quero", "quer", "queremos", "querem", "quis", "quisemos", "quiseram",
        "queria", "queriam", "queira",
    ]);
    // pôr
    set.extend([
        "pôr", "ponho", "põe", "pomos", "põem", "pus", "pôs", "puseram", "punha", "ponha",
    ]);
    // saber ("saber" itself is usually the noun)
    set.extend([
        "sei", "sabe", "sabemos", "sabem", "soube", "souberam", "sabia", "sabiam", "saberá",
        "saiba", "saibam",
    ]);
    // ler, trazer, sair, rir, ir
    set.extend([
        "ler", "leio", "lê", "leem", "li", "leu", "leram", "trago", "traz", "trazem", "trouxe",
        "trouxeram", "saio", "sai", "saem", "saí", "rir", "ri", "riu", "ir",
    ]);
    set
});

/// Frequent adjectives too short or too irregular for the suffix rules.
pub static COMMON_ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "bom", "boa", "bons", "boas", "mau", "má", "maus", "más", "novo", "nova", "novos",
        "novas", "velho", "velha", "velhos", "velhas", "grande", "grandes", "pequeno",
        "pequena", "pequenos", "pequenas", "belo", "bela", "feio", "feia", "lindo", "linda",
        "bonito", "bonita", "alto", "alta", "baixo", "baixa", "longo", "longa", "curto",
        "curta", "jovem", "jovens", "melhor", "melhores", "pior", "piores", "maior", "maiores",
        "menor", "menores", "forte", "fortes", "fraco", "fraca", "feliz", "felizes", "triste",
        "tristes", "fácil", "difícil", "simples", "certo", "certa", "claro", "clara", "livre",
        "livres", "rico", "rica", "pobre", "pobres", "cheio", "cheia", "vazio", "vazia",
        "quente", "frio", "fria", "importante", "importantes", "rápido", "rápida", "lento",
        "lenta",
    ])
});

/// Verb or adjective for a frequent open-class word outside the suffix rules.
pub fn frequent_open_class(word: &str) -> Option<Upos> {
    if IRREGULAR_VERBS.contains(word) {
        Some(Upos::Verb)
    } else if COMMON_ADJECTIVES.contains(word) {
        Some(Upos::Adj)
    } else {
        None
    }
}

/// Nouns whose endings look like verb morphology.
pub static VERB_SHAPED_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        // -ar / -er / -ir
        "lugar", "mar", "bar", "par", "altar", "jantar", "luar", "colar", "ar", "açúcar",
        "celular", "militar", "escolar", "regular", "similar", "particular", "singular",
        "elementar", "exemplar", "milhar", "patamar", "radar", "polegar", "familiar", "popular",
        "lar", "olhar", "pesar", "mulher", "poder", "prazer", "dever", "saber", "lazer",
        "talher", "colher", "ser", "líder", "elixir", "faquir", "nadir", "zefir",
        // -ando / -endo / -indo
        "comando", "bando", "brando", "tremendo", "horrendo", "estupendo", "fundo",
        "mundo", "segundo", "profundo", "oriundo",
        // -ado / -ido / -ada / -ida
        "estado", "lado", "mercado", "resultado", "dado", "dados", "cuidado", "soldado",
        "passado", "pecado", "fado", "gado", "prado", "deputado", "advogado", "sentido",
        "partido", "vestido", "ruído", "marido", "ouvido", "pedido", "tecido", "apelido",
        "gemido", "estrada", "entrada", "saída", "vida", "comida", "bebida", "medida",
        "ferida", "corrida", "jornada", "camada", "chegada", "morada", "década", "piada",
        "temporada", "calçada", "escada", "manada", "madrugada", "salada", "mesada", "fachada",
        "ida", "dúvida", "dívida", "partida", "recado", "senado", "mandado", "reinado",
        "ditado", "teclado", "telhado", "bolado", "obrigado", "obrigada", "nada", "cada",
        "parada", "largada", "lida", "estados", "resultados", "mercados", "lados",
        // finite-looking
        "ramos", "primos", "oitava", "lava", "cava", "trava", "show", "ei", "lei", "rei",
        "amos", "temos", "somos", "museu", "museus", "europeu", "judeu", "liceu", "apogeu",
        "coliseu", "plebeu",
    ])
});

/// Person given names.
pub static GIVEN_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        "joão", "maria", "josé", "ana", "pedro", "paulo", "carlos", "lucas", "luiz", "luís",
        "luis", "antônio", "antonio", "francisco", "marcos", "rafael", "gabriel", "fernanda",
        "juliana", "patrícia", "beatriz", "camila", "mariana", "letícia", "luana", "bruno",
        "rodrigo", "ricardo", "felipe", "gustavo", "tiago", "thiago", "daniel", "eduardo",
        "fernando", "roberto", "marcelo", "sérgio", "jorge", "luciana", "aline", "carla",
        "vanessa", "amanda", "larissa", "bianca", "isabela", "sofia", "helena", "alice",
        "laura", "valentina", "miguel", "arthur", "heitor", "bernardo", "davi", "matheus",
        "mateus", "gabriela", "júlia", "julia", "raquel", "renata", "cristina", "adriana",
        "sandra", "márcia", "vera", "rita", "teresa", "manuel", "joaquim", "luíza", "luiza",
        "andré", "alexandre", "vinícius", "leonardo", "diego", "igor", "caio", "renato",
        "fábio", "fabio", "márcio", "cláudia", "claudia", "simone", "tatiana", "priscila",
        "jéssica", "débora", "sabrina", "natália", "carolina", "clara", "cecília", "lívia",
        "manuela", "lorena", "yasmin", "rosa", "conceição", "aparecida", "raimundo",
        "sebastião", "benedito", "severino", "edson", "wagner", "anderson", "wellington",
    ])
});

/// Places, stored as lowercase multiword names.
pub static LOCATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    set(&[
        // countries and regions
        "brasil", "portugal", "angola", "moçambique", "cabo verde", "argentina", "chile",
        "uruguai", "paraguai", "bolívia", "peru", "colômbia", "venezuela", "méxico",
        "estados unidos", "canadá", "frança", "espanha", "itália", "alemanha", "inglaterra",
        "reino unido", "china", "japão", "índia", "rússia", "europa", "américa",
        "américa latina", "américa do sul", "áfrica", "ásia", "oceania", "amazônia",
        "nordeste", "sudeste", "centro-oeste",
        // states
        "acre", "alagoas", "amapá", "amazonas", "bahia", "ceará", "distrito federal",
        "espírito santo", "goiás", "maranhão", "mato grosso", "mato grosso do sul",
        "minas gerais", "pará", "paraíba", "paraná", "pernambuco", "piauí", "rio de janeiro",
        "rio grande do norte", "rio grande do sul", "rondônia", "roraima", "santa catarina",
        "são paulo", "sergipe", "tocantins",
        // cities
        "rio", "salvador", "recife", "fortaleza", "belo horizonte", "brasília", "curitiba",
        "porto alegre", "manaus", "belém", "goiânia", "florianópolis", "vitória", "natal",
        "maceió", "teresina", "campinas", "santos", "niterói", "joão pessoa", "aracaju",
        "cuiabá", "campo grande", "londrina", "lisboa", "porto", "coimbra", "luanda",
        "maputo", "londres", "paris", "madri", "madrid", "roma", "berlim", "nova york",
        "nova iorque", "tóquio", "pequim", "buenos aires", "santiago",
    ])
});

/// Words that mark a span as an organisation.
pub const ORG_MARKERS: &[&str] = &[
    "universidade", "instituto", "ministério", "secretaria", "empresa", "banco", "companhia",
    "associação", "fundação", "federação", "confederação", "sindicato", "partido", "governo",
    "prefeitura", "câmara", "senado", "congresso", "tribunal", "supremo", "hospital", "escola",
    "faculdade", "colégio", "agência", "conselho", "comissão", "departamento", "grupo", "clube",
    "editora", "jornal", "rede", "igreja", "exército", "marinha", "polícia", "ltda", "s.a.",
    "inc", "corporação", "organização", "assembleia", "petrobras", "embrapa", "fiocruz",
];

/// Connectors allowed inside a multiword proper name.
pub static NAME_CONNECTORS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(&["de", "da", "do", "dos", "das", "e"]));

/// Prepositions that announce a place.
pub static LOCATIVE_PREPOSITIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(&["em", "no", "na", "nos", "nas", "para", "pra"]));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_class_lookup() {
        assert_eq!(closed_class("o"), Some(Upos::Det));
        assert_eq!(closed_class("pelo"), Some(Upos::Adp));
        assert_eq!(closed_class("e"), Some(Upos::Cconj));
        assert_eq!(closed_class("porque"), Some(Upos::Sconj));
        assert_eq!(closed_class("ela"), Some(Upos::Pron));
        assert_eq!(closed_class("foi"), Some(Upos::Aux));
        assert_eq!(closed_class("não"), Some(Upos::Adv));
        assert_eq!(closed_class("três"), Some(Upos::Num));
        assert_eq!(closed_class("gato"), None);
    }

    #[test]
    fn frequent_open_class_words() {
        assert_eq!(frequent_open_class("viu"), Some(Upos::Verb));
        assert_eq!(frequent_open_class("fez"), Some(Upos::Verb));
        assert_eq!(frequent_open_class("põe"), Some(Upos::Verb));
        assert_eq!(frequent_open_class("bom"), Some(Upos::Adj));
        assert_eq!(frequent_open_class("nova"), Some(Upos::Adj));
        assert_eq!(frequent_open_class("saber"), None);
        assert_eq!(frequent_open_class("gato"), None);
    }

    #[test]
    fn open_class_lists_do_not_shadow_closed_class() {
        for word in IRREGULAR_VERBS.iter().chain(COMMON_ADJECTIVES.iter()) {
            assert_eq!(closed_class(word), None, "{word}");
        }
        assert!(IRREGULAR_VERBS.is_disjoint(&COMMON_ADJECTIVES));
    }

    #[test]
    fn abbreviations_are_single_words() {
        assert!(ABBREVIATIONS.iter().all(|w| !w.contains('.')));
    }

    #[test]
    fn gazetteers_are_lowercase() {
        for list in [
            &*LOCATIONS,
            &*GIVEN_NAMES,
            &*ABBREVIATIONS,
            &*VERB_SHAPED_NOUNS,
            &*IRREGULAR_VERBS,
            &*COMMON_ADJECTIVES,
        ] {
            assert!(list.iter().all(|w| w.to_lowercase() == *w));
        }
        assert!(ORG_MARKERS.iter().all(|w| w.to_lowercase() == *w));
    }
}
