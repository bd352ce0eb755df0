//! Command implementations for the `wordgraph` CLI.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cli::args::{Command, WordGraphArgs};
use crate::graph::{GraphRef, WordGraph};
use crate::pagerank::PageRankConfig;

const MENU: &str = "\n===== Text Graph Processor =====
1. Show directed graph
2. Query bridge words
3. Generate new text
4. Calculate shortest path
5. Calculate PageRank
6. Random walk (with file output)
7. Top ranked words
0. Exit";

/// Execute the parsed command line.
pub fn execute_command(args: WordGraphArgs) -> anyhow::Result<()> {
    let graph = load_graph(&args.file);
    let mut session = Session::new(graph, args.seed, args.pagerank_config(), args.out_dir.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match &args.command {
        Some(command) => session.run(command, &mut out),
        None => session.interact(io::stdin().lock(), &mut out),
    };
    result.context("failed to write output")
}

/// Build the graph from `path`. An unreadable file yields an empty graph.
pub fn load_graph(path: &Path) -> WordGraph {
    match WordGraph::from_file(path) {
        Ok(graph) => {
            info!(
                "loaded {}: {} words, {} edges",
                path.display(),
                graph.node_count(),
                graph.edge_count()
            );
            graph
        }
        Err(e) => {
            error!("{e}");
            WordGraph::default()
        }
    }
}

/// A built graph plus the state its queries share.
pub struct Session {
    graph: WordGraph,
    rng: ChaCha8Rng,
    pagerank: PageRankConfig,
    out_dir: PathBuf,
}

impl Session {
    pub fn new(
        graph: WordGraph,
        seed: Option<u64>,
        pagerank: PageRankConfig,
        out_dir: PathBuf,
    ) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random));
        Self { graph, rng, pagerank, out_dir }
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    /// Run a single command, writing its result to `out`.
    pub fn run<W: Write>(&mut self, command: &Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::Show => writeln!(out, "{}", self.graph),
            Command::Bridge { word1, word2 } => {
                writeln!(out, "{}", self.graph.query_bridge_words(word1, word2))
            }
            Command::Generate { text } => {
                let generated = self.graph.generate_new_text(text, &mut self.rng);
                writeln!(out, "Generated text: {generated}")
            }
            Command::Path { word1, word2: Some(word2) } => {
                writeln!(out, "{}", self.graph.calc_shortest_path(word1, word2))
            }
            Command::Path { word1, word2: None } => {
                for line in self.graph.calc_shortest_paths_from(word1) {
                    writeln!(out, "{line}")?;
                }
                Ok(())
            }
            Command::Rank { word } => match self.graph.page_rank(word, self.pagerank) {
                Some(score) => writeln!(out, "PageRank of \"{word}\": {score:.4}"),
                None => writeln!(out, "Word not found in graph!"),
            },
            Command::Walk { output } => self.walk(output.as_deref(), out),
            Command::Top { k } => {
                for (word, score) in self.graph.top_ranked(*k, self.pagerank) {
                    writeln!(out, "{word}: {score:.4}")?;
                }
                Ok(())
            }
        }
    }

    fn walk<W: Write>(&mut self, output: Option<&str>, out: &mut W) -> io::Result<()> {
        match output.filter(|name| !name.is_empty()) {
            None => {
                let walk = self.graph.random_walk(&mut self.rng);
                writeln!(out, "Random walk: {}", walk.join(" "))
            }
            Some(name) => {
                let (walk, written) =
                    self.graph.random_walk_to_file(&self.out_dir, name, &mut self.rng);
                writeln!(out, "Random walk: {}", walk.join(" "))?;
                match written {
                    Ok(path) => writeln!(out, "Results saved to {}", path.display()),
                    Err(e) => writeln!(out, "Failed to save walk: {e}"),
                }
            }
        }
    }

    /// Menu loop over `input`; ends on `0` or end of input.
    pub fn interact<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        loop {
            writeln!(out, "{MENU}")?;
            let Some(choice) = prompt(&mut input, out, "Enter your choice: ")? else {
                return Ok(());
            };
            let command = match choice.trim() {
                "0" => {
                    writeln!(out, "Exiting...")?;
                    return Ok(());
                }
                "1" => Command::Show,
                "2" => {
                    let Some((word1, word2)) = prompt_pair(&mut input, out)? else {
                        return Ok(());
                    };
                    Command::Bridge { word1, word2 }
                }
                "3" => {
                    let Some(text) = prompt(&mut input, out, "Enter text: ")? else {
                        return Ok(());
                    };
                    Command::Generate { text }
                }
                "4" => {
                    let Some((word1, word2)) = prompt_pair(&mut input, out)? else {
                        return Ok(());
                    };
                    let word2 = Some(word2).filter(|w| !w.trim().is_empty());
                    Command::Path { word1, word2 }
                }
                "5" => {
                    let Some(word) = prompt(&mut input, out, "Enter word: ")? else {
                        return Ok(());
                    };
                    Command::Rank { word }
                }
                "6" => {
                    let msg = "Enter output filename (leave empty for screen only): ";
                    let Some(name) = prompt(&mut input, out, msg)? else {
                        return Ok(());
                    };
                    Command::Walk { output: Some(name.trim().to_string()) }
                }
                "7" => {
                    let Some(k) = prompt(&mut input, out, "How many words: ")? else {
                        return Ok(());
                    };
                    Command::Top { k: k.trim().parse().unwrap_or(10) }
                }
                _ => {
                    writeln!(out, "Invalid choice. Try again.")?;
                    continue;
                }
            };
            self.run(&command, out)?;
        }
    }
}

/// Print `msg` and read one line without its terminator; `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    msg: &str,
) -> io::Result<Option<String>> {
    write!(out, "{msg}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_pair<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(String, String)>> {
    let Some(word1) = prompt(input, out, "Enter word1: ")? else {
        return Ok(None);
    };
    let Some(word2) = prompt(input, out, "Enter word2: ")? else {
        return Ok(None);
    };
    Ok(Some((word1, word2)))
}
