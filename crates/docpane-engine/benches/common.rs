// Shared by every bench target; not all of them use every helper.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, `code` and a [link](#section).\n\n- Bullet point\n* Another [item](./API_REFERENCE.md)\n> Quoted `note`\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| Key | Value |\n|-----|-------|\n| a | **1** |\n| b | `2` |\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_heading_texts(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Section {i}: EIP-7702 & `Passkeys` (part {})", i % 7))
        .collect()
}
