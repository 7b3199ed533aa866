use sigdoc_api::TypeRef;
use sigdoc_core::SignatureDocument;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("SignatureDocument JSON Schema:");
    println!("==============================");
    println!(
        "{}",
        serde_json::to_string_pretty(&SignatureDocument::json_schema()?)?
    );

    println!("\nExample type reference (Map<String, ? extends Number>[]):");
    let example = TypeRef::named("Map")
        .with_type_argument(TypeRef::named("String"))
        .with_type_argument(TypeRef::extends(TypeRef::named("Number")))
        .with_array_dimension();
    println!("{}", serde_json::to_string_pretty(&example)?);

    Ok(())
}
