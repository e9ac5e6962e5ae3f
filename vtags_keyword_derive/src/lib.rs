use itertools::Itertools;
use quote::quote;
use syn::{parse_macro_input, punctuated::Punctuated, Data, DeriveInput, Expr, Lit, Token};

/// Derives the static keyword table for a kind enum.
///
/// Every variant can carry any number of `#[keyword("text", LANGS)]`
/// attributes, where the second argument is a language validity mask.  The
/// macro collects them into a `KEYWORDS` phf map from keyword text to
/// `(Kind, mask)`.  A keyword may only be claimed by one variant; duplicates
/// abort the expansion.
#[proc_macro_derive(KeywordTable, attributes(keyword))]
pub fn derive_keyword_table(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let mut kw_phf = Vec::new();
    let mut kw_names = Vec::new();
    if let Data::Enum(ref enumdata) = input.data {
        for var in enumdata.variants.iter() {
            let varname = &var.ident;
            for attr in var.attrs.iter() {
                if attr.path.is_ident("keyword") {
                    let exprs: Punctuated<Expr, Token![,]> =
                        attr.parse_args_with(Punctuated::parse_terminated).unwrap();
                    assert_eq!(exprs.len(), 2);
                    let kw_str = &exprs[0];
                    let kw_langs = &exprs[1];
                    match kw_str {
                        Expr::Lit(el) => match el.lit {
                            Lit::Str(ref s) => kw_names.push(s.value()),
                            _ => panic!("keyword text should be a string literal"),
                        },
                        _ => panic!("keyword text should be a string literal"),
                    }
                    kw_phf.push(quote! {
                        #kw_str => (#name::#varname, #kw_langs)
                    });
                }
            }
        }
        let dups: Vec<_> = kw_names.iter().duplicates().collect();
        if !dups.is_empty() {
            panic!("keywords claimed by more than one variant: {:?}", dups);
        }
        quote!(
            impl #name {
                pub(crate) const KEYWORDS: ::phf::Map<&'static str, (#name, u32)> = ::phf::phf_map! {
                    #(#kw_phf,)*
                };
            }
        )
        .into()
    } else {
        panic!("should be an enum")
    }
}
