mod common;

use axum::http::StatusCode;
use common::{Part, json, post_form, test_app};

#[tokio::test]
async fn test_calcula_hash_digests() {
    let (status, _, body) = post_form(
        test_app(),
        "/calcula-hash",
        &[Part::File {
            name: "file",
            filename: "hello.txt",
            content: b"hello world",
        }],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = json(&body);
    assert_eq!(json["Nome do arquivo"], "hello.txt");
    assert_eq!(json["hashes"]["md5"], "5eb63bbbe01eeed093cb22bb8f5acdc3");
    assert_eq!(
        json["hashes"]["sha1"],
        "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
    );
    assert_eq!(
        json["hashes"]["sha256"],
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
    assert_eq!(json["hashes"]["sha384"].as_str().unwrap().len(), 96);
}

#[tokio::test]
async fn test_calcula_hash_display_name() {
    let file = Part::File {
        name: "file",
        filename: "upload-tmp-123",
        content: b"content",
    };

    let (_, _, body) = post_form(
        test_app(),
        "/calcula-hash",
        &[
            Part::File {
                name: "file",
                filename: "upload-tmp-123",
                content: b"content",
            },
            Part::Text {
                name: "nomeOriginal",
                value: "relatorio.pdf",
            },
        ],
    )
    .await;
    assert_eq!(json(&body)["Nome do arquivo"], "relatorio.pdf");

    // An empty display name falls back to the uploaded filename
    let (_, _, body) = post_form(
        test_app(),
        "/calcula-hash",
        &[
            file,
            Part::Text {
                name: "nomeOriginal",
                value: "",
            },
        ],
    )
    .await;
    assert_eq!(json(&body)["Nome do arquivo"], "upload-tmp-123");
}

#[tokio::test]
async fn test_calcula_hash_is_deterministic() {
    let parts = [Part::File {
        name: "file",
        filename: "data.bin",
        content: &[0u8, 1, 2, 3, 255],
    }];
    let (_, _, first) = post_form(test_app(), "/calcula-hash", &parts).await;
    let (_, _, second) = post_form(test_app(), "/calcula-hash", &parts).await;
    assert_eq!(json(&first)["hashes"], json(&second)["hashes"]);
}

#[tokio::test]
async fn test_calcula_hash_missing_file() {
    let (status, _, body) = post_form(
        test_app(),
        "/calcula-hash",
        &[Part::Text {
            name: "nomeOriginal",
            value: "x.txt",
        }],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"], "Nenhum arquivo enviado");

    // A `file` part without a filename is a plain field, not an upload
    let (status, _, body) = post_form(
        test_app(),
        "/calcula-hash",
        &[Part::Text {
            name: "file",
            value: "not a file",
        }],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"], "Nenhum arquivo enviado");
}

#[tokio::test]
async fn test_calcula_hash_empty_filename() {
    let (status, _, body) = post_form(
        test_app(),
        "/calcula-hash",
        &[Part::File {
            name: "file",
            filename: "",
            content: b"abc",
        }],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"], "Nenhum arquivo selecionado");
}

#[tokio::test]
async fn test_compara_hashes_identical() {
    let content = b"same content in both uploads";
    let (status, _, body) = post_form(
        test_app(),
        "/compara-hashes",
        &[
            Part::File {
                name: "file1",
                filename: "a.txt",
                content,
            },
            Part::File {
                name: "file2",
                filename: "b.txt",
                content,
            },
            Part::Text {
                name: "nomeOriginal1",
                value: "original-a.txt",
            },
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = json(&body);
    assert_eq!(json["files"]["file1"], "original-a.txt");
    assert_eq!(json["files"]["file2"], "b.txt");
    assert_eq!(json["hashes"]["file1"], json["hashes"]["file2"]);
    assert_eq!(json["Comparação"]["md5"], true);
    assert_eq!(json["Comparação"]["sha1"], true);
    assert_eq!(json["Comparação"]["sha256"], true);
    assert!(json["Comparação"].get("sha384").is_none());
    assert_eq!(json["São identicos"], true);
}

#[tokio::test]
async fn test_compara_hashes_one_byte_differs() {
    let (status, _, body) = post_form(
        test_app(),
        "/compara-hashes",
        &[
            Part::File {
                name: "file1",
                filename: "a.bin",
                content: b"payload-0",
            },
            Part::File {
                name: "file2",
                filename: "b.bin",
                content: b"payload-1",
            },
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = json(&body);
    assert_eq!(json["Comparação"]["md5"], false);
    assert_eq!(json["São identicos"], false);
    assert_ne!(
        json["hashes"]["file1"]["sha384"],
        json["hashes"]["file2"]["sha384"]
    );
}

#[tokio::test]
async fn test_compara_hashes_validation() {
    let (status, _, body) = post_form(
        test_app(),
        "/compara-hashes",
        &[Part::File {
            name: "file1",
            filename: "a.bin",
            content: b"a",
        }],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json(&body)["error"],
        "São necessários dois arquivos (file1 e file2)"
    );

    let (status, _, body) = post_form(
        test_app(),
        "/compara-hashes",
        &[
            Part::File {
                name: "file1",
                filename: "a.bin",
                content: b"a",
            },
            Part::File {
                name: "file2",
                filename: "",
                content: b"b",
            },
        ],
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"], "Dois arquivos devem ser selecionados");
}

#[tokio::test]
async fn test_gateway_alias_routes() {
    let (status, _, body) = post_form(
        test_app(),
        "/hashAPI",
        &[Part::File {
            name: "file",
            filename: "x.txt",
            content: b"",
        }],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json(&body)["hashes"]["md5"],
        "d41d8cd98f00b204e9800998ecf8427e"
    );

    let (status, _, body) = post_form(
        test_app(),
        "/comparaAPI",
        &[
            Part::File {
                name: "file1",
                filename: "x",
                content: b"1",
            },
            Part::File {
                name: "file2",
                filename: "y",
                content: b"1",
            },
        ],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["São identicos"], true);
}
