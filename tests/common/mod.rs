use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// A hub stand-in that answers exactly one request.
pub struct OneShot {
    pub endpoint: String,
    handle: JoinHandle<String>,
}

impl OneShot {
    /// Request line of the request that was served, e.g. `GET /api/... HTTP/1.1`.
    pub fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}

pub fn serve_once(status: &str, headers: &[(&str, &str)], body: &str) -> OneShot {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());

    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        body.len()
    );
    for (name, value) in headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    response.push_str(body);

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        let request = String::from_utf8_lossy(&request).into_owned();
        request.lines().next().unwrap_or("").to_owned()
    });

    OneShot { endpoint, handle }
}

/// An endpoint nothing listens on.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
