/// Number of exam questions requested when the client value is not a
/// positive number.
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

pub fn activity_prompt(ano: &str, materia: &str, tipo: &str) -> String {
    format!(
        "Crie uma atividade completa para o {ano} de {materia}. Tipo: {tipo}. \
         Inclua texto, contos ou problemas conforme necessário."
    )
}

pub fn correction_prompt(resposta_aluno: &str, gabarito: &str) -> String {
    format!(
        "Corrija a resposta do aluno em relação ao gabarito e explique o que está \
         correto ou errado.\nResposta do aluno: {resposta_aluno}\nGabarito: {gabarito}"
    )
}

pub fn lesson_plan_prompt(ano: &str, materia: &str, semana: &str) -> String {
    format!(
        "Crie um planejamento de aula detalhado para {ano} de {materia}, abordando \
         objetivos, metodologia e recursos para a(s) semana(s) {semana}."
    )
}

/// Parse the requested question count, falling back to
/// [`DEFAULT_QUESTION_COUNT`] for anything that is not a positive number.
pub fn parse_question_count(quantidade: &str) -> u32 {
    quantidade
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_QUESTION_COUNT)
}

pub fn exam_prompt(num_questoes: u32, ano: &str, materia: &str, turma: &str) -> String {
    format!(
        "Crie {num_questoes} questões completas para uma prova do {ano} de {materia} \
         para a turma {turma}.\n\
         Inclua:\n\
         - Questão numerada\n\
         - Texto ou contos, se for interpretação textual\n\
         - Alternativas A,B,C,D para cada questão\n\
         - Indique claramente o gabarito (ex: Questão 1: B)\n\
         Separe as questões do gabarito."
    )
}

pub fn guardian_message_prompt(aluno: &str, mensagem: &str) -> String {
    format!(
        "Escreva uma mensagem clara e cordial para o responsável do aluno {aluno}: \
         \"{mensagem}\""
    )
}

pub fn material_suggestions_prompt(termo: &str, disciplina: &str, ano: &str) -> String {
    format!(
        "Sugira 5 materiais para {} do {} sobre \"{}\".\n\
         Retorne em JSON no formato:\n\
         [\n\
           {{\"nome\":\"\",\"disciplina\":\"\",\"ano\":\"\",\"tipo\":\"\",\"descricao\":\"\"}},\n\
           ...\n\
         ]\n\
         Use títulos curtos e úteis para professor.",
        or_default(disciplina, "disciplinas variadas"),
        or_default(ano, "EF anos iniciais"),
        or_default(termo, "conteúdos básicos"),
    )
}

pub fn summary_prompt(conteudo: &str, publico: &str) -> String {
    format!(
        "Resuma o seguinte texto para {}:\n\n{conteudo}",
        or_default(publico, "estudantes")
    )
}

pub fn educational_text_prompt(tema: &str, disciplina: &str, ano: &str, tipo: &str) -> String {
    format!(
        "Crie um {} educativo para {} do {}, com o tema: \"{tema}\".",
        or_default(tipo, "conto"),
        or_default(disciplina, "disciplinas variadas"),
        or_default(ano, "ensino fundamental"),
    )
}
