use std::fmt::Write;

use crate::error::{Result, TldError};
use crate::generator::CompiledCorpus;
use crate::types::{CorpusVariant, LabelKind};

fn find(corpora: &[CompiledCorpus], variant: CorpusVariant) -> Result<&CompiledCorpus> {
    corpora
        .iter()
        .find(|c| c.variant == variant)
        .ok_or_else(|| TldError::EmitError(format!("missing {} corpus", variant)))
}

fn write_slice<'a>(out: &mut String, items: impl Iterator<Item = &'a str>) {
    for item in items {
        // Labels are letters, marks, digits and hyphens only; no escaping needed.
        let _ = writeln!(out, "\t\"{}\",", item);
    }
}

/// Render the Go source file. Needs all three corpus variants.
pub fn render(corpora: &[CompiledCorpus], package: &str) -> Result<String> {
    let full = find(corpora, CorpusVariant::Full)?;
    let ascii = find(corpora, CorpusVariant::Ascii)?;
    let punycode = find(corpora, CorpusVariant::Punycode)?;

    let mut out = String::new();
    let _ = writeln!(out, "// Code generated by tldgen. DO NOT EDIT.");
    out.push('\n');
    let _ = writeln!(out, "package {}", package);
    out.push('\n');
    out.push_str("import \"slices\"\n\n");

    out.push_str("// TLDsAscii is similar to [`TLDs`], but it only contains ASCII characters.\n");
    out.push_str("var TLDsAscii = []string{\n");
    write_slice(&mut out, ascii.strings());
    out.push_str("}\n\n");

    out.push_str("var punycodeTLDs = []string{\n");
    write_slice(
        &mut out,
        punycode
            .entries
            .iter()
            .filter(|e| e.kind == LabelKind::Punycode)
            .map(|e| e.as_str()),
    );
    out.push_str("}\n\n");

    out.push_str("var unicodeTLDs = []string{\n");
    write_slice(
        &mut out,
        full.entries
            .iter()
            .filter(|e| e.is_unicode())
            .map(|e| e.as_str()),
    );
    out.push_str("}\n\n");

    out.push_str("// TLDs is generated from the IANA root zone list, with punycode decoded to Unicode.\n");
    out.push_str("var TLDs = append(slices.Clone(TLDsAscii), unicodeTLDs...)\n\n");
    out.push_str("// TLDsPunycode is similar to [`TLDs`], but it keeps punycode labels encoded.\n");
    out.push_str("var TLDsPunycode = append(slices.Clone(TLDsAscii), punycodeTLDs...)\n\n");

    let _ = writeln!(out, "// TLDRegex is regex pattern to match [`TLDs`]");
    let _ = writeln!(out, "var TLDRegex = `{}`", full.pattern);
    out.push('\n');
    let _ = writeln!(out, "// TLDAsciiRegex is regex pattern to match [`TLDsAscii`]");
    let _ = writeln!(out, "var TLDAsciiRegex = `{}`", ascii.pattern);
    out.push('\n');
    let _ = writeln!(out, "// TLDsPunycodeRegex is regex pattern to match [`TLDsPunycode`]");
    let _ = writeln!(out, "var TLDsPunycodeRegex = `{}`", punycode.pattern);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;

    fn corpora() -> Vec<CompiledCorpus> {
        Generator::new()
            .compile_all(&["COM", "CN", "XN--FIQS8S", "XN--P1AI"])
            .unwrap()
    }

    #[test]
    fn test_render_sections() {
        let source = render(&corpora(), "urlx").unwrap();

        assert!(source.starts_with("// Code generated by tldgen. DO NOT EDIT."));
        assert!(source.contains("package urlx\n"));
        assert!(source.contains("var TLDsAscii = []string{\n\t\"cn\",\n\t\"com\",\n}"));
        assert!(source.contains("var punycodeTLDs = []string{\n\t\"xn--fiqs8s\",\n\t\"xn--p1ai\",\n}"));
        assert!(source.contains("var unicodeTLDs = []string{\n\t\"рф\",\n\t\"中国\",\n}"));
        assert!(source.contains("var TLDRegex = `c(?:n|om)|рф|中国`"));
        assert!(source.contains("var TLDAsciiRegex = `c(?:n|om)`"));
        assert!(source.contains("var TLDsPunycodeRegex = `c(?:n|om)|xn--(?:fiqs8s|p1ai)`"));
    }

    #[test]
    fn test_render_requires_all_variants() {
        let mut corpora = corpora();
        corpora.retain(|c| c.variant != CorpusVariant::Punycode);
        match render(&corpora, "urlx") {
            Err(TldError::EmitError(msg)) => assert!(msg.contains("punycode"), "got: {}", msg),
            other => panic!("expected EmitError, got {:?}", other),
        }
    }
}
