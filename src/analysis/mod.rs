use tracing::debug;

use crate::config::EngineConfig;
use crate::document::Document;
use crate::huffman::{build_huffman, HuffmanEncoding, HuffmanPage};
use crate::pagination::{Page, PagedText, PaginationError, Paginator};
use crate::statistics::StatisticsEngine;
use crate::tokenize::{Tokenizer, WordTokenizer};
use crate::types::{AnalysisMetadata, FileReport, UploadReport};

/// Ties the engines together behind one configuration.
pub struct DocumentAnalyzer<T> {
    statistics: StatisticsEngine<T>,
    paginator: Paginator,
}

impl Default for DocumentAnalyzer<WordTokenizer> {
    fn default() -> Self {
        Self::new(WordTokenizer, &EngineConfig::v0())
    }
}

impl<T> DocumentAnalyzer<T>
where
    T: Tokenizer,
{
    pub fn new(tokenizer: T, config: &EngineConfig) -> Self {
        Self {
            statistics: StatisticsEngine::new(tokenizer, config.statistics.clone()),
            paginator: Paginator::new(config.pagination.clone()),
        }
    }

    /// Analyse one upload batch. Reports come back in upload order.
    pub fn analyze(&self, documents: &[Document]) -> UploadReport {
        // 1. Statistics Phase
        let contents: Vec<&str> = documents.iter().map(|doc| doc.content.as_str()).collect();
        let stats = self.statistics.compute(&contents);

        // 2. Summary Phase
        let top_words = stats.summary();
        let analysis = AnalysisMetadata {
            documents_considered: stats.document_count,
            distinct_words: stats.distinct_words,
            top_k: self.statistics.config().top_k,
            words_selected: stats.vocabulary.len(),
        };

        // 3. Report Phase
        let (per_document, word_counts) = stats.into_parts();
        let files: Vec<FileReport> = documents
            .iter()
            .zip(per_document)
            .zip(word_counts)
            .map(|((doc, metrics), word_count)| FileReport {
                name: doc.name.clone(),
                version: doc.version.as_str().to_string(),
                size: doc.size,
                word_count,
                metrics,
            })
            .collect();

        debug!(
            files = files.len(),
            words_selected = analysis.words_selected,
            "upload analysed"
        );

        UploadReport {
            files,
            top_words,
            analysis,
        }
    }

    /// Encode a document once; page through the result with [`Self::huffman_page`].
    pub fn encode(&self, document: &Document) -> HuffmanEncoding {
        build_huffman(&document.content)
    }

    pub fn huffman_page<'a>(
        &self,
        encoding: &'a HuffmanEncoding,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<HuffmanPage<'a>, PaginationError> {
        let text = PagedText::new(&encoding.encoded);
        let page = self.paginator.page(&text, offset, limit)?;
        Ok(HuffmanPage {
            code_map: &encoding.code_map,
            page,
        })
    }

    /// Raw content window, for displaying the original text.
    pub fn content_page<'a>(
        &self,
        document: &'a Document,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Page<'a>, PaginationError> {
        let text = PagedText::new(&document.content);
        self.paginator.page(&text, offset, limit)
    }
}
