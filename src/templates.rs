// src/templates.rs
use crate::naming::ScaffoldNames;

pub struct Templates;

impl Templates {
    /// Stateless widget that registers its controller through GetX.
    pub fn view(names: &ScaffoldNames) -> String {
        format!(
            r#"import 'package:flutter/material.dart';
import 'package:get/get.dart';

import '../controllers/{controller_file}';

class {view_class} extends StatelessWidget {{
  const {view_class}({{
    Key? key,
  }}) : super(key: key);

  @override
  Widget build(BuildContext context) {{
    {controller_class} cc = Get.put({controller_class}());
    return Placeholder();
  }}
}}
"#,
            controller_file = names.controller_file(),
            view_class = names.view_class,
            controller_class = names.controller_class,
        )
    }

    pub fn controller(names: &ScaffoldNames) -> String {
        format!(
            "import 'package:flutter/material.dart';\n\
             import 'package:get/get.dart';\n\
             \n\
             class {} extends GetxController {{\n  \n}}\n",
            names.controller_class
        )
    }
}
