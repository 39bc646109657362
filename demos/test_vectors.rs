use joytherun::digest::{Digester, Md5};
use joytherun::sign::{login_url_sign, signature_v1, signature_v2};
use serde::Serialize;

const TEST_VECTOR_OUTPUT_FILE: &str = "test_vectors/signatures.json";

#[derive(Serialize)]
struct TestVector {
    kind: &'static str,
    input: String,
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating test vectors...");
    let mut test_vectors = vec![TestVector {
        kind: "login_url_sign",
        input: "po.aspx|1538284879|1538284877,1298,1546".to_owned(),
        output: login_url_sign("po.aspx", 1538284879, [1538284877u64, 1298, 1546])?,
    }];

    let pwd = Md5.hex_digest(b"123456").to_uppercase();
    let login = [
        ("username", "1700012608@pku.cn".to_owned()),
        ("pwd", pwd),
        ("timestamp", "1538184320".to_owned()),
    ];
    let input = serde_json::to_string(&login)?;
    test_vectors.push(TestVector {
        kind: "signature_v1",
        input: input.clone(),
        output: signature_v1(login.clone(), 0, ""),
    });
    test_vectors.push(TestVector {
        kind: "signature_v2",
        input,
        output: signature_v2(login, 0, ""),
    });

    // Convert the test vectors to a json object, pretty print it
    let test_vectors_json = serde_json::to_string_pretty(&test_vectors)?;
    println!("{}", test_vectors_json);
    std::fs::create_dir_all("test_vectors")?;
    std::fs::write(TEST_VECTOR_OUTPUT_FILE, test_vectors_json)?;
    println!("Test vectors written to {}", TEST_VECTOR_OUTPUT_FILE);
    Ok(())
}
