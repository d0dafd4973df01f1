//! Deterministic synthesis of a [`GeneratedApp`] from a prompt.
//!
//! The output depends only on the prompt text: no clock, randomness, or
//! environment is consulted, so identical prompts always produce byte-identical
//! apps.

use appforge_types::GeneratedApp;

/// Number of leading prompt words used for the title.
const TITLE_WORD_LIMIT: usize = 4;

const CODE_HEAD: &str = r#"import { useState } from 'react'

export default function GeneratedApp() {
  const [count, setCount] = useState(0)

  return (
    <div className="min-h-screen bg-gradient-to-br from-purple-900 via-blue-900 to-indigo-900">
      <div className="container mx-auto px-4 py-16">
        <h1 className="text-4xl font-bold text-white mb-8">
          "#;

const CODE_TAIL: &str = r#"
        </h1>

        <div className="bg-white/10 backdrop-blur-lg rounded-2xl p-8 shadow-2xl">
          <p className="text-white text-xl mb-6">
            Counter: {count}
          </p>

          <button
            onClick={() => setCount(count + 1)}
            className="bg-gradient-to-r from-cyan-500 to-blue-500 text-white px-8 py-3 rounded-lg font-semibold hover:shadow-lg transition-all"
          >
            Increment
          </button>
        </div>
      </div>
    </div>
  )
}"#;

/// Derive the title, description, and source listing for a prompt.
///
/// - `title` is the first four whitespace-delimited words joined by single
///   spaces (fewer words yield all of them).
/// - `description` embeds the lowercased prompt.
/// - `code` embeds the prompt verbatim as the page heading.
pub fn synthesize(prompt: &str) -> GeneratedApp {
    GeneratedApp {
        title: title_from(prompt),
        description: description_from(prompt),
        code: code_from(prompt),
    }
}

fn title_from(prompt: &str) -> String {
    prompt.split_whitespace().take(TITLE_WORD_LIMIT).collect::<Vec<_>>().join(" ")
}

fn description_from(prompt: &str) -> String {
    format!(
        "A fully functional {} built with Next.js, React, and TypeScript. Features a modern UI with responsive design.",
        prompt.to_lowercase()
    )
}

fn code_from(prompt: &str) -> String {
    let mut code = String::with_capacity(CODE_HEAD.len() + prompt.len() + CODE_TAIL.len());
    code.push_str(CODE_HEAD);
    code.push_str(prompt);
    code.push_str(CODE_TAIL);
    code
}
