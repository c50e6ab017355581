// Builds the unified roadmap document: fixed header, executive summary,
// and the "generation in progress" notice.

pub const TITLE_LINE: &str =
    "# 🚀 ROADMAP ULTRA-COMPLETO: CAPACITAÇÃO TOTAL, PREVENÇÃO E RESOLUÇÃO DE ERROS";

// Version and methodology lines end in two spaces (markdown hard break)
const METADATA: &str = concat!(
    "**Versão:** 1.0.0  \n",
    "**Metodologia:** Análise Ultra-Avançada Multi-Dimensional (Estilo Ultra 10x)  \n",
    "**Objetivo:** Tornar Ultra-IA totalmente capaz de trabalhar em qualquer sistema NexoPro sem dificuldades, ",
    "prevenir 100% dos erros documentados, resolver erros em análise única com certeza absoluta, ",
    "e executar auditorias forenses completas\n",
);

const SECTION_RULE: &str = "---\n";

const SUMMARY_HEADING: &str = "## 📋 SUMÁRIO EXECUTIVO";

const SUMMARY_INTRO: &str =
    "Transformar o **Sistema Ultra IA** em uma plataforma de desenvolvimento assistido por IA que seja:";

const OBJECTIVES: [&str; 9] = [
    "**Totalmente Competente** para trabalhar nos três sistemas NexoPro",
    "**Preparada para Qualquer Cenário** (desenvolvimento independente OU unificação multi-plataforma)",
    "**Multi-Plataforma** (desktop, web, Android, iOS, Windows, Linux)",
    "**Capaz de Resolver Problemas Ultra-Complexos** com facilidade e clareza",
    "**Imune a Erros** através de prevenção proativa e validação rigorosa",
    "**Superior a IAs Online** em cenários ultra-complexos específicos do projeto",
    "**Capaz de Prevenir 100% dos Erros** documentados durante desenvolvimento",
    "**Capaz de Resolver Erros em Análise Única** com certeza absoluta e zero falsos positivos",
    "**Capaz de Executar Auditorias Forenses** completas seguindo protocolo rigoroso",
];

const SCOPE: [&str; 7] = [
    "Análise completa dos três sistemas NexoPro",
    "Análise completa dos erros documentados (ERRORS_HISTORY.md - 3929 linhas, 76+ erros únicos)",
    "Análise completa das competências atuais do Ultra-IA",
    "Identificação de TODAS as competências necessárias",
    "Estratégias avançadas para problemas ultra-complexos",
    "Roadmap detalhado de implementação (FASE 0-10)",
    "Integração de 12 sistemas essenciais de auditoria forense",
];

const STATISTICS: [(&str, &str); 8] = [
    ("Total de Erros Analisados", "76+ erros únicos documentados"),
    ("Padrões Identificados", "24+ padrões recorrentes"),
    ("Categorias Principais", "10 categorias"),
    ("Taxa de Prevenção Potencial", "100% dos erros podem ser prevenidos com sistemas adequados"),
    ("Taxa de Resolução em Análise Única", "100% dos erros podem ser identificados e resolvidos em análise única"),
    ("Taxa de Falsos Positivos Atual", "44.4% (a ser eliminada completamente)"),
    ("Taxa de Certeza Absoluta", "100% (0% ou 100%, nunca intermediário)"),
    ("Sistemas de Auditoria Integrados", "12 sistemas essenciais"),
];

const IN_PROGRESS_NOTICE: &str = "## 🎯 NOTA IMPORTANTE

Este roadmap unificado está sendo gerado automaticamente. O arquivo completo com todas as PARTES (1-9) e FASES (0-10) será gerado em breve.

**Status:** Em geração...
**Próximo passo:** Completar integração de todas as seções
";

/// The generated document, written verbatim to the output path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    content: String,
}

impl OutputDocument {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Line count with no phantom empty line after the final newline
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

/// Render the executive summary: objectives, analysis scope and statistics
pub fn executive_summary() -> String {
    let mut out = String::new();

    out.push_str(SUMMARY_HEADING);
    out.push_str("\n\n### Objetivo Final Consolidado\n\n");
    out.push_str(SUMMARY_INTRO);
    out.push_str("\n\n");
    for (i, objective) in OBJECTIVES.iter().enumerate() {
        out.push_str(&format!("{}. ✅ {}\n", i + 1, objective));
    }

    out.push_str("\n### Escopo da Análise\n\n");
    for item in SCOPE {
        out.push_str(&format!("- ✅ {item}\n"));
    }

    out.push_str("\n### Estatísticas Consolidadas\n\n");
    for (label, value) in STATISTICS {
        out.push_str(&format!("- **{label}:** {value}\n"));
    }

    out.push('\n');
    out.push_str(SECTION_RULE);
    out.push('\n');
    out
}

/// Assemble the unified roadmap.
///
/// The source reports are not consulted: the document is fixed text, so the
/// result is identical on every call.
pub fn assemble() -> OutputDocument {
    let summary = executive_summary();

    let mut content = String::with_capacity(4096);
    content.push_str(TITLE_LINE);
    content.push_str("\n\n");
    content.push_str(METADATA);
    content.push('\n');
    content.push_str(SECTION_RULE);
    content.push('\n');
    content.push_str(&summary);
    content.push_str("\n\n");
    content.push_str(IN_PROGRESS_NOTICE);
    content.push('\n');
    content.push_str(SECTION_RULE);
    content.push('\n');

    OutputDocument { content }
}
