mod article_document;

pub use article_document::ArticleDocument;
