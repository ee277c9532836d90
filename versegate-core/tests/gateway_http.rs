use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use versegate_core::{BibleGateway, CanonicalReference, Config, FetchError, VerseSource};

const JOHN_3_16: &str = include_str!("fixtures/john_3_16.html");

/// Answers exactly one HTTP request with `status` and `body`, then returns the
/// request line it received.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/verse/en/", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header == "\r\n" || header.is_empty() {
                break;
            }
        }
        let mut stream = reader.into_inner();
        // The client may hang up as soon as it has the status line.
        let _ = write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.flush();
        request_line.trim_end().to_string()
    });
    (base_url, handle)
}

fn gateway(base_url: &str) -> BibleGateway {
    let config = Config {
        base_url: base_url.to_string(),
        ..Config::default()
    };
    BibleGateway::new(&config).unwrap()
}

fn john_3_16() -> CanonicalReference {
    CanonicalReference::new("John 3:16")
}

#[test]
fn ok_page_yields_rows_and_percent_encoded_path() {
    let (base, server) = serve_once("200 OK", JOHN_3_16);
    let result = gateway(&base).fetch(&john_3_16()).unwrap();
    assert_eq!(server.join().unwrap(), "GET /verse/en/John%203%3A16 HTTP/1.1");

    assert_eq!(result.reference, john_3_16());
    let codes: Vec<&str> = result.translations.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, ["KJV", "NIV", "ESV", "ZZZ", "YLT"]);
    assert_eq!(result.translations[1].full_name, "New International Version");
}

#[test]
fn not_found_is_a_status_error() {
    let (base, server) = serve_once("404 Not Found", "<html>Not found</html>");
    let err = gateway(&base).fetch(&john_3_16()).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, FetchError::Status(404)), "got {err:?}");
}

#[test]
fn created_status_is_rejected() {
    let (base, server) = serve_once("201 Created", JOHN_3_16);
    let err = gateway(&base).fetch(&john_3_16()).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, FetchError::Status(201)), "got {err:?}");
}

#[test]
fn page_without_rows_is_no_verses() {
    let (base, server) = serve_once("200 OK", "<html><body><p>No results</p></body></html>");
    let err = gateway(&base).fetch(&john_3_16()).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, FetchError::NoVerses), "got {err:?}");
}

#[test]
fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/verse/en/", listener.local_addr().unwrap());
    drop(listener);
    let err = gateway(&base).fetch(&john_3_16()).unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}
