use docaddr::connstr::ConnSpec;
use docaddr::errors::PathError;
use docaddr::lexer::tokenize;
use docaddr::resolve;
use serde_json::json;

fn main() -> Result<(), PathError> {
    let spec = ConnSpec::parse("couchbase://db1:8091,db2/travel?timeout=5000");
    println!("{:#?}", spec);
    println!("{}", spec.normalize());

    let path = tokenize("addresses[0].city");
    let doc = resolve::insert(json!({}), &path, json!("Valletta"))?;
    println!("{}", doc);

    Ok(())
}
