//! End-to-end tests: fixture trees through the assembler

use vitae::render::{HeadingPassThrough, Renderer};
use vitae::{load_document, Assembler, Document, Locale, Schema};

fn fixture(name: &str) -> Document {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    load_document(path).expect("fixture to load")
}

#[test]
fn test_english_body() {
    let doc = fixture("cv-en.yaml");
    let body = Renderer::new(&HeadingPassThrough).render_sections(&doc.sections, Locale::En);

    let expected = concat!(
        "\\cvsection{Profile}\n",
        "\\begin{cvsummary}\n",
        "\\cvcolumns{Engineer focused on \\textbf{reliable} systems.}{Ten years of shipping networked software.}\n",
        "Happy to mentor.\n",
        "\\end{cvsummary}\n",
        "\\cvseparator\n",
        "\n",
        "\\cvsection{Experience}\n",
        "\\cvblock{\\href{https://acme.example}{Acme Corp}}{\\cvlocation{Athens}}\n",
        "\\cventry{Senior Engineer}{Mar '19 -- present}{Led the storage team.}\n",
        "\\cventry{Engineer}{Jun '15 -- Feb '19}{Built the ingest pipeline.}\n",
        "\\cvseparator\n",
        "\n",
        "\\cvsection{Education}\n",
        "\\cvblock{University of Crete}{}\n",
        "\\cventry{MSc Computer Science}{2013 -- 2015}{\\textit{Department of Computer Science}\\newline{}Thesis on consensus protocols.}\n",
        "\\cvseparator\n",
        "\n",
        "\\cvsection{Skills}\n",
        "\\cvlabel{Languages}{Rust, Go, C}\n",
        "\\cvlabel{Tools}{Git, Nix}\n",
    );
    assert_eq!(body, expected);
}

#[test]
fn test_english_document_envelope() {
    let doc = fixture("cv-en.yaml");
    let latex = vitae::to_latex(&doc);

    assert!(latex.starts_with("\\documentclass[11pt]{article}\n%% vitae: fixed CV schema\n"));
    assert!(latex.contains("\\usepackage[english]{babel}\n\\begin{document}\n"));
    assert!(latex.contains(concat!(
        "\\begin{document}\n",
        "\\cvname{Jane Doe}\n",
        "\\cvtagline{Systems Engineer}\n",
        "\\cvcontact{\\href{mailto:jane@example.com}{jane@example.com} \\cvbullet{} \\cvdial{+}30 2810 123456 \\cvbullet{} \\href{https://jane.example}{jane.example} \\cvbullet{} \\href{https://github.com/janedoe}{janedoe}}\n",
        "\\cvaddress{Heraklion \\cvbullet{} Greece}\n",
        "\\cvrule\n",
        "\\cvsection{Profile}\n",
    )));
    assert!(latex.ends_with("\\cvlabel{Tools}{Git, Nix}\n\\end{document}\n"));
}

#[test]
fn test_greek_document() {
    let doc = fixture("cv-el.json");
    let latex = vitae::to_latex(&doc);

    assert!(latex.contains("\\cvname{Γιάννης Παπαδόπουλος}\n"));
    assert!(latex.contains("\\cvcontact{\\cvdial{+}30 6912345678}\n"));
    assert!(latex.contains("\\cventry{Μηχανικός}{Μαρ '19 -- σήμερα}{Ανάπτυξη συστημάτων.}\n"));
    assert!(latex.contains("\\cventry{Πτυχίο}{2008 -- 2012}{}\n"));
    assert_eq!(latex.matches("\\cvseparator\n").count(), 1);
}

#[test]
fn test_assembly_is_repeatable() {
    let doc = fixture("cv-en.yaml");
    let assembler = Assembler::new(Schema::bundled());
    assert_eq!(assembler.assemble(&doc), assembler.assemble(&doc));
    assert_eq!(vitae::to_latex(&doc), assembler.assemble(&doc.clone()));
}

#[test]
fn test_empty_document_still_produces_envelope() {
    let latex = vitae::to_latex(&Document::default());
    let body = latex
        .lines()
        .skip_while(|l| !l.starts_with("\\begin{document}"))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(body, @r"
    \begin{document}
    \cvrule
    \end{document}
    ");
}
