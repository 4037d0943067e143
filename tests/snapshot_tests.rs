//! Snapshot tests for generated TOCs, numbered documents and formatter output

use insta::assert_snapshot;
use mkdtoc::formatters::{format_github, format_text};
use mkdtoc::toc::build_toc;
use mkdtoc::{Action, Config, Document, RunOptions, build_index, ops, run_sync};

const MANUAL: &str = "\
## Overview

## Installation

### From crates.io

### From source

```bash
# build it
cargo build --release
```

## Usage

### Commands

#### number

#### toc

### Configuration

## FAQ

### Why?
";

fn run(action: Action, inputs: &[(&str, &str)]) -> mkdtoc::RunResults {
    let mut options = RunOptions::new(action);
    for (name, content) in inputs {
        options = options.with_string(*name, *content);
    }
    run_sync(&options).unwrap()
}

#[test]
fn test_snapshot_toc() {
    let headings = build_index(&Document::parse(MANUAL)).unwrap();
    assert_snapshot!(build_toc(&headings, &[]).join("\n"), @r"
    * [Overview](#overview)
    * [Installation](#installation)
        * [From crates.io](#from-cratesio)
        * [From source](#from-source)
    * [Usage](#usage)
        * [Commands](#commands)
            * [number](#number)
            * [toc](#toc)
        * [Configuration](#configuration)
    * [FAQ](#faq)
        * [Why?](#why?)
    ");
}

#[test]
fn test_snapshot_toc_top_two_levels() {
    let headings = build_index(&Document::parse(MANUAL)).unwrap();
    assert_snapshot!(build_toc(&headings, &[1, 2]).join("\n"), @r"
    * [Overview](#overview)
    * [Installation](#installation)
        * [From crates.io](#from-cratesio)
        * [From source](#from-source)
    * [Usage](#usage)
        * [Commands](#commands)
        * [Configuration](#configuration)
    * [FAQ](#faq)
        * [Why?](#why?)
    ");
}

#[test]
fn test_snapshot_numbered_document() {
    let mut doc = Document::parse(MANUAL);
    ops::add_numbers(&mut doc, &Config::default()).unwrap();
    assert_snapshot!(doc.content(), @r"
    ## 1 Overview

    ## 2 Installation

    ### 2.1 From crates.io

    ### 2.2 From source

    ```bash
    # build it
    cargo build --release
    ```

    ## 3 Usage

    ### 3.1 Commands

    #### 3.1.1 number

    #### 3.1.2 toc

    ### 3.2 Configuration

    ## 4 FAQ

    ### 4.1 Why?
    ");
}

#[test]
fn test_snapshot_text_outline() {
    let results = run(
        Action::Outline,
        &[
            ("guide.md", "# Guide\n\n## Install\n\n## Install\n"),
            ("broken.md", "# Guide\n\n### Deep\n"),
            ("plain.md", "No headings here.\n"),
        ],
    );
    assert_snapshot!(format_text(&results), @r"
    broken.md:
      error: line 3: heading level 3 skips level 2

    guide.md:
       1  1 Guide #guide
       3    1.1 Install #install
       5    1.2 Install #install-1

    plain.md:
      (no headings)
    ");
}

#[test]
fn test_snapshot_github_annotations() {
    let results = run(
        Action::UpdateToc,
        &[
            ("ok.md", "# A\n\n* [A](#a)\n"),
            ("missing.md", "# A\n"),
            ("shallow.md", "## A\n# B\n"),
        ],
    );
    assert_snapshot!(format_github(&results), @r"
    ::warning file=missing.md,title=mkdtoc::TOC not found or corrupted
    ::error file=shallow.md,line=2,title=mkdtoc::heading level 1 is above the document's top level 2
    ");
}
