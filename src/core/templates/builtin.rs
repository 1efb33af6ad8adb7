//! Compiled-in template bundles.
//!
//! Every `%s` receives the element's real name; `%%` would be a literal `%`.
//! Content is emitted byte for byte apart from that substitution.

use super::kind::ElementKind;
use super::types::{FileTemplate, TemplateBundle};

/// React component with a react-redux container
pub static COMPONENT_BUNDLE: TemplateBundle = TemplateBundle {
    kind: ElementKind::Component,
    root_dir: "src/components/%s",
    capitalize: true,
    files: &[
        FileTemplate {
            file_name: "index.js",
            content: r#"import %sContainer from './%sContainer'
export default %sContainer"#,
        },
        FileTemplate {
            file_name: "%s.js",
            content: r#"//@flow
import React, { Component } from 'react';

import './style.css'

type Props = {}
type State = {}
class %s extends Component<Props, State> {
	render(){
		return (
			<div className="custom"/>
		)
	}
}
export default %s;"#,
        },
        FileTemplate {
            file_name: "%sContainer.js",
            content: r#"// @flow
import { connect } from 'react-redux'
import %s from './%s'

const mapStateToProps = (state) => {
	return {}
}

const mapDispatchToProps = (dispatch) => {
	return {}
}

export default connect(mapStateToProps, mapDispatchToProps)(%s)"#,
        },
        FileTemplate {
            file_name: "style.css",
            content: r#"
.custom{
	background-color: lime;
}
"#,
        },
    ],
};

/// Redux reducer module
pub static REDUCER_BUNDLE: TemplateBundle = TemplateBundle {
    kind: ElementKind::Reducer,
    root_dir: "src/redux/reducers/%s",
    capitalize: false,
    files: &[
        FileTemplate {
            file_name: "index.js",
            content: r#"import %s from './%s'
export default %s
export * from './%s'"#,
        },
        FileTemplate {
            file_name: "%s.js",
            content: r#"//@flow
export const MY_ACTION = 'MY_ACTION'
type stateType = {}
type actionType = { type: string }
const initState = {}
const %s = (state: stateType = initState, action: actionType = { type: MY_ACTION }) => {
	switch (action.type) {
		case MY_ACTION:
			return { ...state, someExtraProp: "some data" }
		default:
			return state
	}
}
export default %s"#,
        },
    ],
};

/// Redux action creators module
pub static ACTION_BUNDLE: TemplateBundle = TemplateBundle {
    kind: ElementKind::Action,
    root_dir: "src/redux/actions/%s",
    capitalize: false,
    files: &[
        FileTemplate {
            file_name: "index.js",
            content: r#"export * from './%s'"#,
        },
        FileTemplate {
            file_name: "%s.js",
            content: r#"//@flow
import { STATE_CHANGE } from "../../reducers";


export const myAction = () => {
	return {
		type: STATE_CHANGE,
	}
}"#,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::substitution::net_slot_count;

    #[test]
    fn test_component_file_order() {
        let names: Vec<_> = COMPONENT_BUNDLE.file_names().collect();
        assert_eq!(
            names,
            vec!["index.js", "%s.js", "%sContainer.js", "style.css"]
        );
    }

    #[test]
    fn test_redux_bundles_file_order() {
        for bundle in [&REDUCER_BUNDLE, &ACTION_BUNDLE] {
            let names: Vec<_> = bundle.file_names().collect();
            assert_eq!(names, vec!["index.js", "%s.js"]);
        }
    }

    #[test]
    fn test_root_dirs_have_one_slot() {
        for bundle in [&COMPONENT_BUNDLE, &REDUCER_BUNDLE, &ACTION_BUNDLE] {
            assert_eq!(net_slot_count(bundle.root_dir), 1, "{}", bundle.root_dir);
        }
    }

    #[test]
    fn test_static_files_have_no_slot() {
        let style = COMPONENT_BUNDLE.files[3];
        assert_eq!(net_slot_count(style.file_name), 0);
        assert_eq!(net_slot_count(style.content), 0);
        assert_eq!(net_slot_count(ACTION_BUNDLE.files[1].content), 0);
    }

    #[test]
    fn test_bundles_know_their_kind() {
        for kind in ElementKind::all() {
            assert_eq!(kind.bundle().kind, kind);
        }
    }

    #[test]
    fn test_templates_use_tab_indentation() {
        assert!(COMPONENT_BUNDLE.files[1].content.contains("\n\trender(){"));
        assert!(REDUCER_BUNDLE.files[1].content.contains("\n\tswitch"));
    }
}
