// /////////////////////////////////////////////////////////////////////////////
// Search Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # `search-pipeline-demo`
//!
//! Drives one search request through [`SearchExecutor`] using in-memory
//! adapters: a small fixed vector catalog, a templated completion
//! provider, an in-process pubsub bus, and a logging analytics sink.
//! With `--stream`, subscribes to the request's pubsub channel and
//! prints each lifecycle/data event as it arrives.

use clap::Parser;
use search_pipeline::infrastructure::adapters::{
    InMemoryPubSub, InMemoryVectorStore, CatalogEntry, LoggingAnalyticsSink, NullDatabase, TemplateCompletionProvider,
};
use search_pipeline::infrastructure::config::ExecutorSettings;
use search_pipeline::infrastructure::{logging, runtime::SearchExecutor};
use search_pipeline::operators::{
    embedding, CompletionOperator, EmbeddingOperator, QdrantFilterOperator, QueryExpansionOperator,
    QueryInterpretationOperator, RecencyOperator, RerankingOperator, VectorSearchOperator,
};
use search_pipeline_bootstrap::Cli;
use search_pipeline_domain::{ApiKeys, RequestContext, SearchConfig};
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

fn sample_catalog() -> Vec<CatalogEntry> {
    let now = chrono::Utc::now();
    vec![
        CatalogEntry {
            id: "doc-rust-async".into(),
            embedding: embedding::embed("rust async runtime"),
            payload: json!({"title": "Async Rust Patterns", "updated_at": now.to_rfc3339()}),
        },
        CatalogEntry {
            id: "doc-rust-ownership".into(),
            embedding: embedding::embed("rust ownership and borrowing"),
            payload: json!({"title": "Ownership Explained", "updated_at": (now - chrono::Duration::days(900)).to_rfc3339()}),
        },
        CatalogEntry {
            id: "doc-search-pipelines".into(),
            embedding: embedding::embed("configurable search pipelines"),
            payload: json!({"title": "Composable Search", "updated_at": now.to_rfc3339()}),
        },
    ]
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init("search_pipeline=info,search_pipeline_demo=info");

    let settings = ExecutorSettings::load(None).unwrap_or_default();

    let pubsub = Arc::new(InMemoryPubSub::new());
    let analytics = Arc::new(LoggingAnalyticsSink);
    let vector_store = Arc::new(InMemoryVectorStore::new(sample_catalog()));
    let completion_provider = Arc::new(TemplateCompletionProvider);

    let embedding = Arc::new(EmbeddingOperator);
    let vector_search = Arc::new(VectorSearchOperator::new(vector_store));

    let limit = cli.limit.unwrap_or(settings.default_limit);
    let offset = cli.offset.unwrap_or(settings.default_offset);

    let mut builder =
        SearchConfig::builder(cli.query.clone(), cli.collection.clone(), embedding, vector_search).limit(limit).offset(offset);

    if cli.expand {
        builder = builder.query_expansion(Arc::new(QueryExpansionOperator));
    }
    if cli.interpret {
        builder = builder.query_interpretation(Arc::new(QueryInterpretationOperator));
    }
    if cli.filter {
        builder = builder.qdrant_filter(Arc::new(QdrantFilterOperator));
    }
    if cli.recency {
        builder = builder.recency(Arc::new(RecencyOperator::new(chrono::Utc::now())));
    }
    if cli.rerank {
        builder = builder.reranking(Arc::new(RerankingOperator));
    }
    if cli.complete {
        builder = builder.completion(Arc::new(CompletionOperator::new(completion_provider)));
    }

    let config = Arc::new(builder.build());

    let request_id = if cli.stream { Some(Uuid::new_v4().to_string()) } else { None };

    let mut subscriber = request_id.as_ref().map(|rid| pubsub.subscribe(&format!("{}:{}", settings.channel_prefix, rid)));

    let printer = subscriber.take().map(|mut rx| {
        tokio::spawn(async move {
            while let Ok(event) = rx.recv().await {
                println!("{event}");
                if event["type"] == "done" {
                    break;
                }
            }
        })
    });

    let executor = SearchExecutor::new(pubsub, analytics, settings.channel_prefix.clone())
        .with_emitter_channel_capacity(settings.emitter_channel_capacity);
    let request_ctx = Arc::new(RequestContext {
        organization_id: Uuid::new_v4(),
        organization_name: "demo-org".into(),
        user_id: None,
        auth_method: "cli".into(),
    });

    let result = executor
        .execute(config, Arc::new(NullDatabase), request_ctx, ApiKeys::default(), request_id, CancellationToken::new())
        .await;

    if let Some(handle) = printer {
        let _ = handle.await;
    }

    match result {
        Ok(context) => {
            let results = context.final_results.unwrap_or_default();
            println!("{} result(s):", results.len());
            for result in &results {
                println!("  {} (score {:.3})", result.id, result.score);
            }
            if let Some(completion) = context.completion {
                println!("\n{completion}");
            }
        }
        Err(err) => {
            eprintln!("search failed: {err}");
            std::process::exit(1);
        }
    }
}
