use quote::{format_ident, quote};

/// Generates one `#[test]` per `*.calc` script found next to this crate.
#[proc_macro]
pub fn generate_tests(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let root_dir = format!("{}/..", env!("CARGO_MANIFEST_DIR"));
    let tests = walkdir::WalkDir::new(root_dir.clone())
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("calc".as_ref()))
        .map(|entry| {
            let script_path = entry.path().to_string_lossy();
            let relative_path = entry.path().strip_prefix(&root_dir).unwrap().to_string_lossy();
            let test_ident = format_ident!(
                "test_{}",
                relative_path.replace('/', "_").replace('-', "_").replace(".calc", "")
            );
            quote! {
                #[test]
                fn #test_ident() {
                    calc_expect(std::fs::read_to_string(#script_path).unwrap().as_str());
                }
            }
        });

    quote! {
        #[ctor::ctor]
        fn init() {
            env_logger::init();
        }

        #(#tests)*
    }
    .into()
}
