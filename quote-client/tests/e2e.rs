use std::collections::HashSet;
use std::time::Duration;

use quote_client::{GetError, QotdClient, TransportError, fetch_all};
use quote_core::{Deadline, ErrorCode, ErrorEnvelope};
use quote_server::{AppState, QuoteStore, ServerConfig, serve};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn fixture_store() -> QuoteStore {
    let mut b = QuoteStore::builder();
    for q in ["Q1", "Q2", "Q3"] {
        b.insert("Mark Twain", q).unwrap();
    }
    b.insert("Ben Franklin", "Q4").unwrap();
    b.build().unwrap()
}

async fn start_server(store: QuoteStore) -> QotdClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(store, ServerConfig::default());
    tokio::spawn(serve(listener, state, std::future::pending()));

    QotdClient::new(&format!("http://{addr}")).unwrap()
}

/// Сервер-заглушка: принимает одно соединение и отвечает сырыми байтами
async fn stub_server(reply: &'static [u8]) -> QotdClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = sock.read(&mut buf).await;
        let _ = sock.write_all(reply).await;
        let _ = sock.shutdown().await;
    });

    QotdClient::new(&format!("http://{addr}")).unwrap()
}

/// Сервер-заглушка, который отдаёт в канал заголовки первого запроса
async fn capturing_server() -> (QotdClient, tokio::sync::oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel();

    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut chunk = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = sock.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&chunk[..n]);
        }
        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());

        let body = r#"{"quote":"Q","error":null}"#;
        let reply = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = sock.write_all(reply.as_bytes()).await;
        let _ = sock.shutdown().await;
    });

    (QotdClient::new(&format!("http://{addr}")).unwrap(), rx)
}

#[tokio::test]
async fn known_author_returns_one_of_their_quotes() {
    let client = start_server(fixture_store()).await;

    for _ in 0..20 {
        let q = client.get(None, "Mark Twain").await.unwrap().unwrap();
        assert!(["Q1", "Q2", "Q3"].contains(&q.as_str()), "{q}");
    }

    assert_eq!(client.get(None, "Ben Franklin").await.unwrap(), Ok("Q4".to_string()));
}

#[tokio::test]
async fn unknown_author_is_application_error() {
    let client = start_server(fixture_store()).await;

    let app = client.get(None, "Nobody").await.unwrap().unwrap_err();
    assert_eq!(
        app,
        ErrorEnvelope {
            code: ErrorCode::UnknownAuthor,
            msg: "Author \"Nobody\" was not found".to_string(),
        }
    );

    let flat = client.get_quote(None, "Nobody").await.unwrap_err();
    assert!(matches!(flat, GetError::Application(_)));
    assert_eq!(flat.code(), Some(ErrorCode::UnknownAuthor));
}

#[tokio::test]
async fn empty_author_returns_quote_from_store() {
    let client = start_server(fixture_store()).await;

    let mut seen = HashSet::new();
    for _ in 0..50 {
        let q = client.get_quote(None, "").await.unwrap();
        assert!(["Q1", "Q2", "Q3", "Q4"].contains(&q.as_str()), "{q}");
        seen.insert(q);
    }
    assert!(seen.len() > 1, "random selection should vary: {seen:?}");
}

#[tokio::test]
async fn concurrent_calls_are_paired_with_their_author() {
    let mut b = QuoteStore::builder();
    let authors: Vec<String> = (0..16).map(|i| format!("Author {i}")).collect();
    for a in &authors {
        for n in 0..3 {
            b.insert(a.clone(), format!("{a} / quote {n}")).unwrap();
        }
    }
    let client = start_server(b.build().unwrap()).await;

    let outcomes = fetch_all(&client, authors.clone(), None).await;
    assert_eq!(outcomes.len(), authors.len());

    let mut got = HashSet::new();
    for o in outcomes {
        let quote = o.result.unwrap().unwrap();
        assert!(quote.starts_with(&format!("{} / ", o.author)), "{} -> {quote}", o.author);
        got.insert(o.author);
    }
    assert_eq!(got, authors.into_iter().collect::<HashSet<_>>());
}

#[tokio::test]
async fn fan_out_collects_failures_too() {
    let client = start_server(fixture_store()).await;

    let outcomes = fetch_all(&client, ["Ben Franklin", "Nobody", ""], None).await;
    assert_eq!(outcomes.len(), 3);

    for o in outcomes {
        match o.author.as_str() {
            "Ben Franklin" => assert_eq!(o.result.unwrap(), Ok("Q4".to_string())),
            "Nobody" => assert!(o.result.unwrap().is_err()),
            "" => assert!(o.result.unwrap().is_ok()),
            other => panic!("unexpected author {other:?}"),
        }
    }
}

#[tokio::test]
async fn elapsed_deadline_does_not_contact_server() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let client = QotdClient::new(&format!("http://{addr}")).unwrap();
    let err = client
        .get(Some(Deadline::after(Duration::ZERO)), "Mark Twain")
        .await
        .unwrap_err();
    assert!(err.is_deadline_exceeded());

    let accepted = listener.accept();
    assert!(
        matches!(&accepted, Err(e) if e.kind() == std::io::ErrorKind::WouldBlock),
        "server must not be contacted: {accepted:?}"
    );
}

#[tokio::test]
async fn silent_server_hits_deadline() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_sock, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let client = QotdClient::new(&format!("http://{addr}"))
        .unwrap()
        .with_default_timeout(Duration::from_millis(200));

    let started = std::time::Instant::now();
    let err = client.get(None, "Mark Twain").await.unwrap_err();
    assert!(err.is_deadline_exceeded(), "{err}");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let addr = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap()
    };

    let client = QotdClient::new(&format!("http://{addr}")).unwrap();
    let err = client.get(None, "Mark Twain").await.unwrap_err();
    assert!(matches!(err, TransportError::Http(_)), "{err}");
}

#[tokio::test]
async fn non_success_status_is_transport_error() {
    let client = stub_server(
        b"HTTP/1.1 400 Bad Request\r\ncontent-type: text/plain\r\ncontent-length: 8\r\nconnection: close\r\n\r\nbad body",
    )
    .await;

    let err = client.get(None, "Mark Twain").await.unwrap_err();
    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(body, "bad body");
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn malformed_response_body_is_transport_error() {
    let client = stub_server(
        b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 9\r\nconnection: close\r\n\r\nnot json!",
    )
    .await;

    let err = client.get_quote(None, "Mark Twain").await.unwrap_err();
    assert!(
        matches!(err, GetError::Transport(TransportError::Wire(_))),
        "{err}"
    );
    assert_eq!(err.code(), None);
}

#[tokio::test]
async fn unset_error_code_still_reaches_caller_as_application_error() {
    let client = stub_server(
        b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 42\r\nconnection: close\r\n\r\n{\"quote\":\"\",\"error\":{\"Code\":\"\",\"Msg\":\"x\"}}",
    )
    .await;

    let app = client.get(None, "Mark Twain").await.unwrap().unwrap_err();
    assert_eq!(app.code, ErrorCode::Unknown);
    assert_eq!(app.msg, "x");
}

#[tokio::test]
async fn remaining_budget_is_sent_in_timeout_header() {
    let (client, rx) = capturing_server().await;
    let client = client.with_default_timeout(Duration::from_millis(1500));

    assert_eq!(client.get(None, "Mark Twain").await.unwrap(), Ok("Q".to_string()));

    let head = rx.await.unwrap();
    let value = head
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case(quote_core::TIMEOUT_HEADER)
                .then(|| value.trim().to_string())
        })
        .unwrap_or_else(|| panic!("no timeout header in:\n{head}"));

    let ms: u64 = value.parse().unwrap();
    assert!(ms > 1000 && ms <= 1500, "{ms}");
}
