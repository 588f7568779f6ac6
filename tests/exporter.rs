//! Integration tests for the exporter surface.
//!
//! These exercise the exporter the way a pipeline would: batches built with
//! every documented gap shape, batches arriving from JSON, and concurrent
//! consume calls sharing one exporter instance.

use std::sync::{Arc, Mutex};
use std::thread;

use telelog::{
    Attributes, InstrumentationScope, Level, LogBatch, LogRecord, MetricBatch,
    MetricPoint, MetricValue, Resource, ResourceLogs, ResourceMetrics, ResourceSpans, ScopeLogs,
    ScopeMetrics, ScopeSpans, Sink, Span, TextExporter, TraceBatch,
};

/// Records every line it receives, in arrival order.
struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            lines: Mutex::new(Vec::new()),
        })
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Sink for RecordingSink {
    fn write(&self, _level: Level, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

fn exporter_with_sink() -> (TextExporter, Arc<RecordingSink>) {
    let sink = RecordingSink::new();
    let exporter = TextExporter::new("debug", Arc::clone(&sink) as Arc<dyn Sink>).unwrap();
    (exporter, sink)
}

fn trace_batch_of(names: &[&str]) -> TraceBatch {
    TraceBatch {
        resource_spans: vec![Some(ResourceSpans {
            resource: None,
            scope_spans: vec![Some(ScopeSpans {
                scope: None,
                spans: names.iter().map(|n| Some(Span::named(*n))).collect(),
            })],
        })],
    }
}

#[test]
fn trace_consume_never_errors_across_gap_shapes() {
    let (exporter, _sink) = exporter_with_sink();

    let cases = vec![
        TraceBatch::empty(),
        TraceBatch {
            resource_spans: vec![None],
        },
        TraceBatch {
            resource_spans: vec![None, Some(ResourceSpans::default())],
        },
        TraceBatch {
            resource_spans: vec![Some(ResourceSpans {
                resource: Some(Resource::default()),
                scope_spans: vec![None, Some(ScopeSpans::default())],
            })],
        },
        TraceBatch {
            resource_spans: vec![Some(ResourceSpans {
                resource: None,
                scope_spans: vec![Some(ScopeSpans {
                    scope: Some(InstrumentationScope::named("lib")),
                    spans: vec![None, Some(Span::named("kept")), None],
                })],
            })],
        },
    ];
    for batch in &cases {
        assert!(exporter.consume_traces(batch).is_ok());
    }
    assert!(exporter.shutdown().is_ok());
}

#[test]
fn metric_consume_never_errors_across_gap_shapes() {
    let (exporter, sink) = exporter_with_sink();

    let point = |value: MetricValue| MetricPoint {
        name: "m".to_string(),
        unit: String::new(),
        time_unix_nano: 0,
        value,
        attributes: Attributes::new(),
    };
    let cases = vec![
        MetricBatch::empty(),
        MetricBatch {
            resource_metrics: vec![None, Some(ResourceMetrics::default())],
        },
        MetricBatch {
            resource_metrics: vec![Some(ResourceMetrics {
                resource: None,
                scope_metrics: vec![None, Some(ScopeMetrics::default())],
            })],
        },
        MetricBatch {
            resource_metrics: vec![Some(ResourceMetrics {
                resource: None,
                scope_metrics: vec![Some(ScopeMetrics {
                    scope: None,
                    points: vec![
                        None,
                        Some(point(MetricValue::Int(1))),
                        Some(point(MetricValue::Double(0.5))),
                        Some(point(MetricValue::Histogram { count: 2, sum: 3.0 })),
                        Some(point(MetricValue::Unspecified)),
                    ],
                })],
            })],
        },
    ];
    for batch in &cases {
        assert!(exporter.consume_metrics(batch).is_ok());
    }

    // Four present points in the last batch, zero everywhere else.
    assert_eq!(sink.lines().len(), 4);
}

#[test]
fn log_consume_never_errors_across_gap_shapes() {
    let (exporter, sink) = exporter_with_sink();

    let cases = vec![
        LogBatch::empty(),
        LogBatch {
            resource_logs: vec![None, Some(ResourceLogs::default())],
        },
        LogBatch {
            resource_logs: vec![Some(ResourceLogs {
                resource: None,
                scope_logs: vec![None, Some(ScopeLogs::default())],
            })],
        },
        LogBatch {
            resource_logs: vec![Some(ResourceLogs {
                resource: None,
                scope_logs: vec![Some(ScopeLogs {
                    scope: None,
                    records: vec![None, Some(LogRecord::default())],
                })],
            })],
        },
    ];
    for batch in &cases {
        assert!(exporter.consume_logs(batch).is_ok());
    }
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn line_count_equals_present_items() {
    let (exporter, sink) = exporter_with_sink();
    let batch = TraceBatch {
        resource_spans: vec![
            None,
            Some(ResourceSpans {
                resource: None,
                scope_spans: vec![
                    Some(ScopeSpans {
                        scope: None,
                        spans: vec![Some(Span::named("a")), None],
                    }),
                    None,
                ],
            }),
            Some(ResourceSpans {
                resource: None,
                scope_spans: vec![Some(ScopeSpans {
                    scope: None,
                    spans: vec![Some(Span::named("b")), Some(Span::named("c"))],
                })],
            }),
        ],
    };
    exporter.consume_traces(&batch).unwrap();
    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("name=a"));
    assert!(lines[1].contains("name=b"));
    assert!(lines[2].contains("name=c"));
}

#[test]
fn consuming_the_same_batch_twice_is_deterministic() {
    let batch = trace_batch_of(&["x", "y"]);

    let (first, first_sink) = exporter_with_sink();
    first.consume_traces(&batch).unwrap();
    let (second, second_sink) = exporter_with_sink();
    second.consume_traces(&batch).unwrap();

    assert_eq!(first_sink.lines(), second_sink.lines());
}

#[test]
fn batch_deserialized_from_json_consumes_cleanly() {
    let batch: LogBatch = serde_json::from_str(
        r#"{
            "resource_logs": [
                null,
                {
                    "resource": { "attributes": { "service.name": { "String": "backend" } } },
                    "scope_logs": [
                        null,
                        {
                            "scope": { "name": "app" },
                            "records": [
                                null,
                                {
                                    "time_unix_nano": 12,
                                    "severity": "WARN",
                                    "body": { "String": "disk almost full" },
                                    "attributes": { "disk": { "String": "/dev/sda1" } }
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let (exporter, sink) = exporter_with_sink();
    exporter.consume_logs(&batch).unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0],
        "LogRecord time=12 severity=WARN body=disk almost full \
         attributes={disk=/dev/sda1} scope=app resource={service.name=backend}"
    );
}

#[test]
fn concurrent_consumes_preserve_per_call_ordering() {
    let (exporter, sink) = exporter_with_sink();
    let exporter = Arc::new(exporter);

    let threads = 8;
    let spans_per_thread = 25;
    let mut handles = Vec::new();
    for t in 0..threads {
        let exporter = Arc::clone(&exporter);
        handles.push(thread::spawn(move || {
            let names: Vec<String> = (0..spans_per_thread)
                .map(|i| format!("t{t}-span{i:02}"))
                .collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            exporter.consume_traces(&trace_batch_of(&refs)).unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), threads * spans_per_thread);

    // Lines from different calls may interleave, but within each call the
    // traversal order must survive.
    for t in 0..threads {
        let prefix = format!("name=t{t}-");
        let mine: Vec<&String> = lines.iter().filter(|l| l.contains(&prefix)).collect();
        assert_eq!(mine.len(), spans_per_thread);
        for (i, line) in mine.iter().enumerate() {
            assert!(
                line.contains(&format!("name=t{t}-span{i:02}")),
                "thread {t} line {i} out of order: {line}"
            );
        }
    }
}
