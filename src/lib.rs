/*!
# Code Masker

Structural source-code anonymization engine. Given raw source text it
produces a canonicalized variant with comments stripped, string/char
literals preserved verbatim, and identifiers replaced by stable,
role-aware aliases (`FUNC_k` for function names, `VAR_k` for everything
else), plus the mapping table from original identifiers to aliases.

The output feeds a downstream vulnerability-classification model that
must see a de-lexicalized representation of code, so that variable and
function naming neither leaks information nor adds noise.

## Architecture

```text
Code Masker
├── core      - Span model, error taxonomy
├── parser    - Language dispatch, keyword sets, tree-sitter wrapper
└── masker    - Protected spans, role classifier, alias allocator,
                interval rebuilder, whitespace normalizer
```

## Guarantees

- Literal (protected-span) content is byte-identical to the input.
- Comments never reach the output.
- The same identifier text maps to the same alias within one call.
- Output is fully deterministic for a fixed input and configuration.
- Invocations share no state and can run concurrently.

## Usage

```rust
use code_masker::{mask, WhitespaceMode};

let output = mask(
    "int add(int a, int b) { // sum\n return a + b; }",
    "cpp",
    WhitespaceMode::Normalize,
)?;
assert_eq!(
    output.masked,
    "int FUNC_0(int VAR_0, int VAR_1) { return VAR_0 + VAR_1; }"
);
assert_eq!(output.aliases.get("add"), Some("FUNC_0"));
# Ok::<(), code_masker::MaskError>(())
```
*/

pub mod core;
pub mod masker;
pub mod parser;

pub use crate::core::{MaskError, MaskResult, Span};
pub use masker::{
    mask_batch, AliasAllocator, AliasTable, IdentifierRole, MaskOutput, Masker, WhitespaceMode,
};
pub use parser::{Language, NodeKind, SourceParser};

use std::path::Path;

/// Mask a single snippet. Unknown language tags fall back to the
/// C-family configuration.
pub fn mask(source: &str, language_tag: &str, mode: WhitespaceMode) -> MaskResult<MaskOutput> {
    Masker::for_tag(language_tag).mask(source, mode)
}

/// Read a file and mask its contents.
pub fn mask_file<P: AsRef<Path>>(
    path: P,
    language_tag: &str,
    mode: WhitespaceMode,
) -> MaskResult<MaskOutput> {
    let source = std::fs::read_to_string(path)?;
    mask(&source, language_tag, mode)
}
