//! Per-mode prompt templates for LLM correction.
//!
//! Each [`VoiceMode`] gets one fixed [`PromptTemplate`]: a system instruction
//! describing the target syntax and an instruction body with worked examples
//! and an `{input}` placeholder the preprocessed text is substituted into.
//! [`template_for`] selects the template for the active mode.

use crate::mode::VoiceMode;

// ---------------------------------------------------------------------------
// PromptTemplate
// ---------------------------------------------------------------------------

/// A mode-specific correction prompt.
#[derive(Debug)]
pub struct PromptTemplate {
    /// Role instruction sent as the system message.
    pub system: &'static str,
    /// User-message body with worked examples; contains `{input}`.
    pub instruction: &'static str,
}

impl PromptTemplate {
    /// Substitute `input` into the `{input}` placeholder.
    pub fn render(&self, input: &str) -> String {
        self.instruction.replace("{input}", input)
    }
}

// ---------------------------------------------------------------------------
// System instructions
// ---------------------------------------------------------------------------

const SYSTEM_PLAIN: &str = "\
You are a dictation post-correction assistant.
Task: Fix transcription errors while preserving the original meaning.

Rules:
1. Fix mis-transcribed words (homophones, wrong words that sound similar).
2. Remove filler words (um, uh, like, you know).
3. Add appropriate punctuation and capitalisation.
4. Reply with ONLY the corrected text — no explanation.
5. If the text is already correct, return it unchanged.";

const SYSTEM_MARKDOWN: &str = "\
You convert dictated text into clean Markdown.
Task: Rewrite any remaining spoken markup words as Markdown syntax while
preserving the dictated content.

Rules:
1. Convert spoken markup words (\"heading two\", \"bold on\", \"bullet\") into
   Markdown syntax.
2. Keep text that is already valid Markdown exactly as it is.
3. Never add content that was not dictated.
4. Reply with ONLY the corrected Markdown — no explanation.
5. If the text is already correct, return it unchanged.";

const SYSTEM_PYTHON: &str = "\
You convert dictated text into valid Python.
Task: Rewrite spoken symbols and code phrases as Python source while
preserving the dictated intent.

Rules:
1. Convert spoken symbols (\"equals\", \"open paren\", \"colon\") into literal
   Python syntax.
2. Expand dictated skeletons (\"define function foo of x\") into the matching
   Python construct.
3. Use snake_case for dictated multi-word identifiers.
4. Reply with ONLY the code — no explanation, no markdown fences.
5. If the text is already valid Python, return it unchanged.";

const SYSTEM_JAVASCRIPT: &str = "\
You convert dictated text into valid JavaScript.
Task: Rewrite spoken symbols and code phrases as JavaScript source while
preserving the dictated intent.

Rules:
1. Convert spoken symbols (\"equals\", \"fat arrow\", \"open brace\") into
   literal JavaScript syntax.
2. Expand dictated skeletons (\"function foo of x\") into the matching
   JavaScript construct.
3. Use camelCase for dictated multi-word identifiers.
4. Reply with ONLY the code — no explanation, no markdown fences.
5. If the text is already valid JavaScript, return it unchanged.";

const SYSTEM_SHELL: &str = "\
You convert dictated text into shell commands.
Task: Rewrite spoken symbols and flag phrases as a shell command line while
preserving the dictated intent.

Rules:
1. Convert spoken symbols (\"dash dash\", \"pipe\", \"greater than\") into
   literal shell syntax.
2. Keep command and file names exactly as dictated.
3. Reply with ONLY the command — no explanation, no markdown fences.
4. If the text is already a valid command, return it unchanged.";

// ---------------------------------------------------------------------------
// Instruction bodies (worked examples + {input})
// ---------------------------------------------------------------------------

const INSTRUCTION_PLAIN: &str = "\
Examples:
Input: \"um so the meeting is uh moved to thursday\"
Output: \"The meeting is moved to Thursday.\"

Input: \"their going to send it tomorrow\"
Output: \"They're going to send it tomorrow.\"

Dictated text:
{input}

Corrected:
";

const INSTRUCTION_MARKDOWN: &str = "\
Examples:
Input: \"heading two project status new line bold on done bold off\"
Output: \"## project status\n**done**\"

Input: \"bullet milk bullet eggs\"
Output: \"- milk\n- eggs\"

Input: \"## already formatted\"
Output: \"## already formatted\"

Dictated text:
{input}

Corrected:
";

const INSTRUCTION_PYTHON: &str = "\
Examples:
Input: \"define function greet of name colon print name\"
Output: \"def greet(name):\n    print(name)\"

Input: \"count equals count plus 1\"
Output: \"count = count + 1\"

Input: \"for item in items colon\"
Output: \"for item in items:\"

Dictated text:
{input}

Corrected:
";

const INSTRUCTION_JAVASCRIPT: &str = "\
Examples:
Input: \"const add equals open paren a comma b close paren fat arrow a plus b\"
Output: \"const add = (a, b) => a + b\"

Input: \"if x equals equals 3 open brace\"
Output: \"if (x == 3) {\"

Dictated text:
{input}

Corrected:
";

const INSTRUCTION_SHELL: &str = "\
Examples:
Input: \"ls dash dash all pipe grep log\"
Output: \"ls --all | grep log\"

Input: \"git commit dash m double quote fix double quote\"
Output: \"git commit -m \\\"fix\\\"\"

Dictated text:
{input}

Corrected:
";

// ---------------------------------------------------------------------------
// Templates + selection
// ---------------------------------------------------------------------------

static PLAIN_TEMPLATE: PromptTemplate = PromptTemplate {
    system: SYSTEM_PLAIN,
    instruction: INSTRUCTION_PLAIN,
};

static MARKDOWN_TEMPLATE: PromptTemplate = PromptTemplate {
    system: SYSTEM_MARKDOWN,
    instruction: INSTRUCTION_MARKDOWN,
};

static PYTHON_TEMPLATE: PromptTemplate = PromptTemplate {
    system: SYSTEM_PYTHON,
    instruction: INSTRUCTION_PYTHON,
};

static JAVASCRIPT_TEMPLATE: PromptTemplate = PromptTemplate {
    system: SYSTEM_JAVASCRIPT,
    instruction: INSTRUCTION_JAVASCRIPT,
};

static SHELL_TEMPLATE: PromptTemplate = PromptTemplate {
    system: SYSTEM_SHELL,
    instruction: INSTRUCTION_SHELL,
};

/// The correction template for `mode`.
pub fn template_for(mode: VoiceMode) -> &'static PromptTemplate {
    match mode {
        VoiceMode::None => &PLAIN_TEMPLATE,
        VoiceMode::Markdown => &MARKDOWN_TEMPLATE,
        VoiceMode::Python => &PYTHON_TEMPLATE,
        VoiceMode::JavaScript => &JAVASCRIPT_TEMPLATE,
        VoiceMode::Shell => &SHELL_TEMPLATE,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
